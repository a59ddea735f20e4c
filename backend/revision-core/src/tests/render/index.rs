use crate::render::build_index;
use crate::tests::sample_topics;

use models::{IndexEntry, Topic};

#[test]
fn given_sample_deck_when_indexed_then_subjects_in_first_seen_order_with_counts() {
    let index = build_index(&sample_topics());

    assert_eq!(
        index,
        vec![IndexEntry::new("Math", 2), IndexEntry::new("Art", 1)]
    );
    assert_eq!(index[0].label(), "Math (2 topics)");
    assert_eq!(index[1].label(), "Art (1 topics)");
}

/// **VALUE**: Counts partition the deck.
///
/// **BUG THIS CATCHES**: Interleaved subjects (A, B, A) creating a second "A" entry
/// instead of incrementing the first one.
#[test]
fn given_interleaved_subjects_when_indexed_then_counts_sum_to_deck_size() {
    let topics = vec![
        Topic::new("History", "q1", "a1"),
        Topic::new("Art", "q2", "a2"),
        Topic::new("History", "q3", "a3"),
        Topic::new("Biology", "q4", "a4"),
        Topic::new("Art", "q5", "a5"),
    ];

    let index = build_index(&topics);

    let subjects: Vec<&str> = index.iter().map(|e| e.subject.as_str()).collect();
    assert_eq!(subjects, vec!["History", "Art", "Biology"]);
    assert_eq!(index.iter().map(|e| e.count).sum::<usize>(), topics.len());
}

#[test]
fn given_empty_list_when_indexed_then_no_entries() {
    assert!(build_index(&[]).is_empty());
}
