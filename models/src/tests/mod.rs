mod navigation;
