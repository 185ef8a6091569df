//! Frontier queues deciding which pending node is expanded next.
//!
//! `FifoFrontier` drives breadth-first search; `PriorityFrontier` drives
//! best-first (A*) search. Both report their length in O(1) and only `pop`
//! changes what a later read sees.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// Ordering policy over pending search items.
pub trait Frontier<T> {
    /// Adds an item. Implementations may ignore `priority`.
    fn push(&mut self, item: T, priority: u32);

    /// Removes and returns the next item, or `None` if the frontier is empty.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// Whether no items are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in first-out frontier. Priorities are ignored, so the shallowest
/// nodes are always expanded first.
#[derive(Debug)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    /// Create a new empty frontier.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T, _priority: u32) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// The priority ordering key: `(priority, sequence)`.
///
/// Lower priority first; on a tie, the entry pushed earlier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EntryKey {
    priority: u32,
    sequence: u64,
}

/// A frontier entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<EntryKey>` to get
/// min-heap behavior.
#[derive(Debug)]
struct Entry<T> {
    key: Reverse<EntryKey>,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier with deterministic FIFO tie-breaking.
///
/// Every push is stamped with a monotonically increasing sequence number, so
/// two runs over the same input pop items in exactly the same order.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_sequence: u64,
}

impl<T> PriorityFrontier<T> {
    /// Create a new empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: u32) {
        let key = EntryKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(Entry {
            key: Reverse(key),
            item,
        });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
