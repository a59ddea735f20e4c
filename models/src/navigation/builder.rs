use crate::error::model_error::ModelError;
use crate::{ALL_SUBJECTS, ErrorLocation, Filter, NavBar, NavControl, NavId};

use std::collections::HashSet;
use std::panic::Location;

const DEFAULT_ALL_LABEL: &str = "All Subjects";

/// Builder for a validated navigation bar.
///
/// The `all` control is always placed first; subject controls follow in the
/// order they were added.
#[derive(Debug, Default)]
pub struct NavBarBuilder {
    all_label: Option<String>,
    subjects: Vec<String>,
}

impl NavBarBuilder {
    pub fn with_all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = Some(label.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Build the bar with validation. No control is active yet.
    #[track_caller]
    pub fn build(self) -> Result<NavBar, ModelError> {
        let all_label = self
            .all_label
            .unwrap_or_else(|| DEFAULT_ALL_LABEL.to_string());

        if all_label.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("All-subjects label cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut seen = HashSet::new();
        let mut controls = vec![NavControl {
            id: NavId(0),
            target: Filter::All,
            label: all_label,
            active: false,
        }];

        for subject in self.subjects {
            if subject.is_empty() {
                return Err(ModelError::Validation {
                    message: String::from("Navigation subject cannot be empty"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if subject == ALL_SUBJECTS {
                return Err(ModelError::Validation {
                    message: format!("'{ALL_SUBJECTS}' is reserved for the all-subjects control"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if !seen.insert(subject.clone()) {
                return Err(ModelError::Validation {
                    message: format!("Duplicate navigation subject: {subject}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            controls.push(NavControl {
                id: NavId(controls.len()),
                target: Filter::Subject(subject.clone()),
                label: subject,
                active: false,
            });
        }

        Ok(NavBar::from_controls(controls))
    }
}
