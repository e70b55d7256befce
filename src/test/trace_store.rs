use crate::trace::{Trace, TraceEvent, TraceStore};

fn two_step() -> Trace {
    Trace::new(
        2,
        vec![TraceEvent::Compare { i: 0, j: 1 }, TraceEvent::Done],
    )
}

#[test]
fn next_advances_cursor_until_exhausted() {
    let mut store = TraceStore::default();
    assert!(store.is_exhausted());
    assert!(store.next().is_none());

    store.load(two_step());
    assert_eq!(store.len(), 2);
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.remaining(), 2);

    assert_eq!(store.next(), Some(&TraceEvent::Compare { i: 0, j: 1 }));
    assert_eq!(store.cursor(), 1);
    assert_eq!(store.next(), Some(&TraceEvent::Done));
    assert!(store.is_exhausted());
    assert_eq!(store.remaining(), 0);

    assert!(store.next().is_none());
    assert_eq!(store.cursor(), 2);
}

#[test]
fn load_replaces_trace_and_rewinds_cursor() {
    let mut store = TraceStore::default();
    store.load(two_step());
    store.next();
    store.load(Trace::new(0, vec![TraceEvent::Done]));
    assert_eq!(store.cursor(), 0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.next(), Some(&TraceEvent::Done));
}

#[test]
fn clear_discards_trace() {
    let mut store = TraceStore::default();
    store.load(two_step());
    store.next();
    store.clear();
    assert!(store.trace().is_none());
    assert_eq!(store.cursor(), 0);
    assert!(store.is_empty());
}
