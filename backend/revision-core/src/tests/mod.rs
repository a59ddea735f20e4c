mod page;
mod render;

use models::Topic;

/// The Math/Math/Art deck used across tests.
pub(crate) fn sample_topics() -> Vec<Topic> {
    vec![
        Topic::new("Math", "2+2?", "4"),
        Topic::new("Math", "3+3?", "6"),
        Topic::new("Art", "Primary colors?", "Red, blue, yellow"),
    ]
}
