use deepcheck::session::{SessionStore, Speaker, Turn};
use deepcheck::utils::format::{forensic_log, EMPTY_LOG};
use pretty_assertions::assert_eq;

fn texts(store: &SessionStore) -> Vec<(Speaker, String)> {
    store.snapshot().iter().map(|t| (t.speaker(), t.text().to_string())).collect()
}

#[test]
fn test_clear_after_appends_empties_snapshot() {
    let mut store = SessionStore::new();
    store.append(Turn::operator("first"));
    store.append(Turn::assistant("second"));
    store.submit("third");
    store.clear();
    assert!(store.snapshot().is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_append_order_is_preserved() {
    let mut store = SessionStore::new();
    store.append(Turn::assistant("unprompted"));
    store.append(Turn::operator("q1"));
    store.append(Turn::operator("q2"));
    assert_eq!(
        texts(&store),
        vec![
            (Speaker::Assistant, "unprompted".to_string()),
            (Speaker::Operator, "q1".to_string()),
            (Speaker::Operator, "q2".to_string()),
        ]
    );
}

#[test]
fn test_submit_appends_exactly_one_trimmed_turn() {
    let mut store = SessionStore::new();
    store.append(Turn::operator("earlier"));
    store.submit("\t  What does a 12.5% score mean?  \n");
    assert_eq!(store.len(), 2);
    let last = store.last().unwrap();
    assert_eq!(last.speaker(), Speaker::Operator);
    assert_eq!(last.text(), "What does a 12.5% score mean?");
}

#[test]
fn test_whitespace_submissions_append_nothing() {
    let mut store = SessionStore::new();
    for blank in ["", " ", "\n", "\t \r\n"] {
        assert!(store.submit(blank).is_none());
    }
    assert!(store.is_empty());
}

#[test]
fn test_snapshot_is_stable_without_appends() {
    let mut store = SessionStore::new();
    store.submit("is the lip sync off?");
    store.append(Turn::assistant("Slightly."));
    let first = store.snapshot().to_vec();
    let second = store.snapshot().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_store_usable_after_clear() {
    let mut store = SessionStore::new();
    store.submit("before");
    store.clear();
    store.submit("after");
    assert_eq!(texts(&store), vec![(Speaker::Operator, "after".to_string())]);
}

#[test]
fn test_forensic_log_numbers_turns() {
    let mut store = SessionStore::new();
    assert_eq!(forensic_log(store.snapshot()), EMPTY_LOG);

    store.submit("Is the face swapped?");
    store.append(Turn::assistant("No blending artifacts detected."));
    assert_eq!(
        forensic_log(store.snapshot()),
        "1. Operator: Is the face swapped?\n2. DeepCheck: No blending artifacts detected."
    );
}
