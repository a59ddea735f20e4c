/// One line of the subject index: a distinct subject and how many topics carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub subject: String,
    pub count: usize,
}

impl IndexEntry {
    pub fn new(subject: impl Into<String>, count: usize) -> Self {
        Self {
            subject: subject.into(),
            count,
        }
    }

    /// Link text, e.g. `Math (2 topics)`.
    pub fn label(&self) -> String {
        format!("{} ({} topics)", self.subject, self.count)
    }
}
