//! Iteration strategies under comparison.
//!
//! Every strategy visits each element of the sequence exactly once and hands
//! it to `visit`. Sequential strategies visit in index order; the parallel
//! ones only guarantee exactly-once visitation and return after every
//! partition has finished.

use std::fmt;

use rayon::prelude::*;

use crate::sequence::InputSequence;

// ============================================================================
// Sequential
// ============================================================================

/// Counted loop, element fetched by position on every step.
#[allow(clippy::needless_range_loop)]
pub fn indexed_loop<V: FnMut(i32)>(items: &InputSequence, mut visit: V) {
    for i in 0..items.len() {
        visit(items[i]);
    }
}

/// Pre-condition loop with a manually advanced counter.
pub fn while_loop<V: FnMut(i32)>(items: &InputSequence, mut visit: V) {
    let mut i = 0;
    while i < items.len() {
        visit(items[i]);
        i += 1;
    }
}

/// Advances the sequence's cursor until it is exhausted.
pub fn iterator_loop<V: FnMut(i32)>(items: &InputSequence, mut visit: V) {
    for item in items {
        visit(item);
    }
}

/// Lets the sequence drive the traversal and call back per element.
pub fn functional_visit<V: FnMut(i32)>(items: &InputSequence, visit: V) {
    items.for_each(visit);
}

// ============================================================================
// Parallel
// ============================================================================

/// Fork-join over the rayon pool: one scoped task per contiguous chunk.
pub fn parallel_for_each<V: Fn(i32) + Sync + Send>(items: &InputSequence, visit: V) {
    let view = items.as_slice();
    if view.is_empty() {
        return;
    }
    let chunk_len = chunk_len(view.len(), rayon::current_num_threads());
    let visit = &visit;
    rayon::scope(|scope| {
        for chunk in view.chunks(chunk_len) {
            scope.spawn(move |_| chunk.iter().copied().for_each(visit));
        }
    });
}

/// Declarative parallel traversal via `par_iter`.
pub fn parallel_query<V: Fn(i32) + Sync + Send>(items: &InputSequence, visit: V) {
    items.as_slice().par_iter().copied().for_each(visit);
}

/// Length of each chunk when `len` elements are split across `workers`.
fn chunk_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

// ============================================================================
// Contiguous view
// ============================================================================

/// Positional traversal over the borrowed backing slice.
#[allow(clippy::needless_range_loop)]
pub fn contiguous_indexed<V: FnMut(i32)>(items: &InputSequence, mut visit: V) {
    let view = items.as_slice();
    for i in 0..view.len() {
        visit(view[i]);
    }
}

/// Slice iterator over the borrowed backing slice.
pub fn contiguous_iterator<V: FnMut(i32)>(items: &InputSequence, mut visit: V) {
    for &item in items.as_slice() {
        visit(item);
    }
}

// ============================================================================
// Strategy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    IndexedLoop,
    WhileLoop,
    IteratorLoop,
    FunctionalVisit,
    ParallelForEach,
    ParallelQuery,
    ContiguousIndexed,
    ContiguousIterator,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::IndexedLoop,
        Strategy::WhileLoop,
        Strategy::IteratorLoop,
        Strategy::FunctionalVisit,
        Strategy::ParallelForEach,
        Strategy::ParallelQuery,
        Strategy::ContiguousIndexed,
        Strategy::ContiguousIterator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::IndexedLoop => "for",
            Strategy::WhileLoop => "while",
            Strategy::IteratorLoop => "for_each",
            Strategy::FunctionalVisit => "for_each_fn",
            Strategy::ParallelForEach => "parallel_for_each",
            Strategy::ParallelQuery => "parallel_query",
            Strategy::ContiguousIndexed => "for_slice",
            Strategy::ContiguousIterator => "for_each_slice",
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, Strategy::ParallelForEach | Strategy::ParallelQuery)
    }

    pub fn run<V: Fn(i32) + Sync + Send>(self, items: &InputSequence, visit: V) {
        match self {
            Strategy::IndexedLoop => indexed_loop(items, visit),
            Strategy::WhileLoop => while_loop(items, visit),
            Strategy::IteratorLoop => iterator_loop(items, visit),
            Strategy::FunctionalVisit => functional_visit(items, visit),
            Strategy::ParallelForEach => parallel_for_each(items, visit),
            Strategy::ParallelQuery => parallel_query(items, visit),
            Strategy::ContiguousIndexed => contiguous_indexed(items, visit),
            Strategy::ContiguousIterator => contiguous_iterator(items, visit),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
