use runway_sim::domain::event::EventFactory;
use runway_sim::domain::queue::EventQueue;

/// Three events tied at the same instant come out in insertion order.
#[test]
fn test_extract_events_with_equal_time() {
    let mut factory = EventFactory::new();
    let mut queue = EventQueue::new();

    let b = factory.fixture(1);
    let c = factory.fixture(1);
    let d = factory.fixture(1);
    queue.insert(Some(b.clone()));
    queue.insert(Some(c.clone()));
    queue.insert(Some(d.clone()));

    assert_eq!(queue.extract(), Some(b));
    assert_eq!(queue.extract(), Some(c));
    assert_eq!(queue.extract(), Some(d));
}

/// The earlier event comes out first regardless of insertion order.
#[test]
fn test_extract_events_with_different_time() {
    let mut factory = EventFactory::new();
    let mut queue = EventQueue::new();

    let later = factory.fixture(2);
    let earlier = factory.fixture(1);
    queue.insert(Some(later.clone()));
    queue.insert(Some(earlier.clone()));

    assert_eq!(queue.extract(), Some(earlier));
    assert_eq!(queue.extract(), Some(later));
}

/// `len` counts the inserted events; the queue is empty once both are
/// extracted.
#[test]
fn test_event_count() {
    let mut factory = EventFactory::new();
    let mut queue = EventQueue::new();

    queue.insert(Some(factory.fixture(1)));
    queue.insert(Some(factory.fixture(2)));
    assert_eq!(queue.len(), 2);

    queue.extract();
    queue.extract();
    assert!(queue.is_empty());
}

/// A fresh queue is empty; it stops being empty after one insertion.
#[test]
fn test_emptiness() {
    let mut factory = EventFactory::new();
    let mut queue = EventQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);

    queue.insert(Some(factory.fixture(5)));
    assert!(!queue.is_empty());
}

/// For an arbitrary insertion sequence, repeated extraction yields a
/// timestamp-sorted sequence, stable among ties.
#[test]
fn test_full_ordering_property() {
    let mut factory = EventFactory::new();
    let mut queue = EventQueue::new();

    let times = [9_u64, 2, 7, 2, 2, 0, 9, 4, 4, 1];
    for &t in &times {
        queue.insert(Some(factory.fixture(t)));
    }

    let mut previous_time = 0;
    let mut previous_id = None;
    while let Some(event) = queue.extract() {
        assert!(event.time() >= previous_time, "extraction went back in time");
        if event.time() == previous_time {
            if let Some(previous_id) = previous_id {
                assert!(event.event_id() > previous_id, "tie extracted out of insertion order");
            }
        }
        previous_time = event.time();
        previous_id = Some(event.event_id());
    }
}
