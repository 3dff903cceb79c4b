//! Spanning-forest core: union-find, edge ordering, greedy accumulation.
//!
//! Everything in here assumes well-formed input (endpoints below the island
//! count, costs within bound); the library boundary validates before calling
//! in, and nothing here can fail.

mod accumulate;
mod sort;
mod union_find;

pub use accumulate::ForestStats;

use crate::types::{Bridge, CostSplit};
use self::sort::{HeapSupplier, RadixSupplier};

/// Which edge-ordering strategy drives the greedy loop.
///
/// Both produce identical totals. Radix is the linear-time, cache-friendly
/// default; the heap is the comparison-based alternative kept around for
/// benchmarking against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    #[default]
    Radix,
    Heap,
}

/// Run the full pipeline over an owned edge list.
pub(crate) fn max_spanning_split(
    islands: usize,
    bridges: Vec<Bridge>,
    strategy: SortStrategy,
) -> (CostSplit, ForestStats) {
    match strategy {
        SortStrategy::Radix => accumulate::accumulate(islands, RadixSupplier::new(bridges)),
        SortStrategy::Heap => accumulate::accumulate(islands, HeapSupplier::new(bridges)),
    }
}
