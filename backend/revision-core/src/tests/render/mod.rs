mod cards;
mod html;
mod index;
