use models::{IndexEntry, Topic};

use std::collections::HashMap;

/// Distinct subjects in first-seen order, each with its topic count.
pub fn build_index(topics: &[Topic]) -> Vec<IndexEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<IndexEntry> = Vec::new();

    for topic in topics {
        match positions.get(topic.subject.as_str()) {
            Some(&position) => entries[position].count += 1,
            None => {
                positions.insert(&topic.subject, entries.len());
                entries.push(IndexEntry::new(topic.subject.clone(), 1));
            }
        }
    }

    entries
}
