/*!
 * Scheduler Entry Types
 * Per-run bookkeeping and the tie-break order shared by every strategy
 */

use crate::core::types::{DeclIndex, Priority, Ticks};
use crate::process::Process;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Scratch state for one process during one run
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub index: DeclIndex,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub remaining: Ticks,
}

impl Entry {
    /// Build the scratch table for a run, one entry per process in
    /// declaration order
    pub fn table(processes: &[Process]) -> Vec<Entry> {
        processes
            .iter()
            .enumerate()
            .map(|(index, process)| Entry {
                index,
                arrival: process.arrival,
                burst: process.burst,
                priority: process.effective_priority(),
                remaining: process.burst,
            })
            .collect()
    }
}

/// Total selection order: `primary`, then earliest arrival, then declaration
/// index
///
/// Declaration indices are unique, so no two keys ever compare equal and
/// selection never depends on container iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct SelectionKey {
    pub primary: i64,
    pub arrival: Ticks,
    pub index: DeclIndex,
}

impl SelectionKey {
    fn with_primary(primary: i64, entry: &Entry) -> Self {
        Self {
            primary,
            arrival: entry.arrival,
            index: entry.index,
        }
    }

    pub fn arrival(entry: &Entry) -> Self {
        Self::with_primary(entry.arrival, entry)
    }

    pub fn burst(entry: &Entry) -> Self {
        Self::with_primary(entry.burst, entry)
    }

    pub fn remaining(entry: &Entry) -> Self {
        Self::with_primary(entry.remaining, entry)
    }

    pub fn priority(entry: &Entry) -> Self {
        Self::with_primary(entry.priority, entry)
    }
}

/// Ready set that always yields the smallest key
#[derive(Debug, Default)]
pub(super) struct ReadyHeap {
    // BinaryHeap is a max-heap, so keys are wrapped in Reverse
    heap: BinaryHeap<Reverse<SelectionKey>>,
}

impl ReadyHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: SelectionKey) {
        self.heap.push(Reverse(key));
    }

    /// Declaration index of the best candidate
    pub fn pop(&mut self) -> Option<DeclIndex> {
        self.heap.pop().map(|Reverse(key)| key.index)
    }
}

/// Walks processes in arrival order, admitting each exactly once
#[derive(Debug)]
pub(super) struct ArrivalCursor {
    order: Vec<(Ticks, DeclIndex)>,
    next: usize,
}

impl ArrivalCursor {
    pub fn new(entries: &[Entry]) -> Self {
        Self {
            order: arrival_order(entries)
                .into_iter()
                .map(|index| (entries[index].arrival, index))
                .collect(),
            next: 0,
        }
    }

    /// Admit every not-yet-admitted process with `arrival <= now`, in
    /// arrival order
    pub fn admit(&mut self, now: Ticks, mut on_arrival: impl FnMut(DeclIndex)) {
        while let Some(&(arrival, index)) = self.order.get(self.next) {
            if arrival > now {
                break;
            }
            on_arrival(index);
            self.next += 1;
        }
    }

    /// Arrival time of the next process not yet admitted
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.order.get(self.next).map(|&(arrival, _)| arrival)
    }
}

/// Declaration indices sorted by arrival, ties by declaration order
pub(super) fn arrival_order(entries: &[Entry]) -> Vec<DeclIndex> {
    let mut order: Vec<DeclIndex> = (0..entries.len()).collect();
    order.sort_by_key(|&index| SelectionKey::arrival(&entries[index]));
    order
}
