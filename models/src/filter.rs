use std::fmt::{Display, Formatter, Result as FormatResult};

/// Sentinel filter value that selects every subject.
pub const ALL_SUBJECTS: &str = "all";

/// The active subject of the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Subject(String),
}

impl Filter {
    /// Whether a card tagged with `subject` is visible under this filter.
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Subject(wanted) => wanted == subject,
        }
    }

    /// Value as written in `data-filter` attributes.
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL_SUBJECTS,
            Filter::Subject(subject) => subject,
        }
    }
}

impl From<&str> for Filter {
    fn from(raw: &str) -> Self {
        if raw == ALL_SUBJECTS {
            Filter::All
        } else {
            Filter::Subject(raw.to_string())
        }
    }
}

impl Display for Filter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}
