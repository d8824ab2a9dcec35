use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::event::RunwayEvent;

/// One queued event together with its insertion sequence number.
///
/// The sequence number is the secondary ordering key: among events with
/// the same timestamp, the one inserted first is extracted first.
#[derive(Debug)]
struct QueueEntry {
    event: RunwayEvent,
    seq: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.event.time() == other.event.time() && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    /// Reversed comparison so the `BinaryHeap` max-heap yields the event
    /// with the smallest `(time, seq)` key first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.event.time().cmp(&self.event.time()).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Time-ordered queue of pending simulation events.
///
/// Repeated extraction yields events in non-decreasing timestamp order;
/// events with equal timestamps come out in insertion order. The queue is
/// a binary heap keyed by `(timestamp, insertion sequence)`, so insert and
/// extract are O(log n) while the observable ordering contract is that of
/// an insertion-stable ordered list.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl EventQueue {
    /// Creates an empty queue of unbounded size.
    pub fn new() -> EventQueue {
        EventQueue { heap: BinaryHeap::new(), next_seq: 0 }
    }

    /// Inserts an event, keeping extraction order.
    ///
    /// `None` is deliberately a no-op: state-machine transitions that
    /// produce no follow-up event feed their result straight into the
    /// queue.
    pub fn insert(&mut self, event: Option<RunwayEvent>) {
        let Some(event) = event else {
            return;
        };
        log::debug!("queued     {}", event);
        self.heap.push(QueueEntry { event, seq: self.next_seq });
        self.next_seq += 1;
    }

    /// Removes and returns the earliest pending event: the one occurring
    /// before all others, or the first-inserted among those tied for the
    /// earliest instant. Returns `None` if the queue is empty.
    pub fn extract(&mut self) -> Option<RunwayEvent> {
        self.heap.pop().map(|entry| entry.event)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
