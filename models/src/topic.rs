use serde::{Deserialize, Serialize};

/// One question/answer pair tagged with a subject.
///
/// Records are read-only and have no identity beyond their position in the
/// list. All three fields are required; a record missing one is rejected by
/// the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub subject: String,
    pub question: String,
    pub answer: String,
}

impl Topic {
    pub fn new(
        subject: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}
