//! The two expansion orders used by the search loop: a FIFO queue for
//! breadth-first search and a lazy-deletion binary min-heap for Dijkstra and
//! A*. Entries refer to nodes by their index in the run's node map.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A heap entry ordered for min-extraction by `priority`. Equal priorities
/// fall back to push order (`seq`), so expansion stays FIFO on ties and runs
/// are reproducible.
pub(crate) struct HeapEntry<C> {
    priority: C,
    cost: C,
    seq: u64,
    index: usize,
}

impl<C: PartialEq> Eq for HeapEntry<C> {}

impl<C: PartialEq> PartialEq for HeapEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.seq.eq(&other.seq)
    }
}

impl<C: Ord> PartialOrd for HeapEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for HeapEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both comparisons are reversed.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// The set of discovered-but-not-finalized nodes, in one of two pop orders.
///
/// A node may be pushed more than once with different costs (lazy deletion);
/// the search loop discards pops whose carried `cost` no longer matches the
/// node's best known g-cost.
pub(crate) enum Frontier<C> {
    Fifo(VecDeque<(usize, C)>),
    MinHeap {
        heap: BinaryHeap<HeapEntry<C>>,
        seq: u64,
    },
}

impl<C: Ord + Copy> Frontier<C> {
    pub fn fifo() -> Frontier<C> {
        Frontier::Fifo(VecDeque::new())
    }

    pub fn min_heap() -> Frontier<C> {
        Frontier::MinHeap {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Inserts a node handle with the g-cost it was reached at and the
    /// priority it should be popped by. The FIFO order ignores `priority`.
    pub fn push(&mut self, index: usize, cost: C, priority: C) {
        match self {
            Frontier::Fifo(queue) => queue.push_back((index, cost)),
            Frontier::MinHeap { heap, seq } => {
                heap.push(HeapEntry {
                    priority,
                    cost,
                    seq: *seq,
                    index,
                });
                *seq += 1;
            }
        }
    }

    /// Removes the next node by this frontier's ordering rule, returning its
    /// handle and the g-cost it was pushed with.
    pub fn pop(&mut self) -> Option<(usize, C)> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::MinHeap { heap, .. } => heap.pop().map(|e| (e.index, e.cost)),
        }
    }
}
