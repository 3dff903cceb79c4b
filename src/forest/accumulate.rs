//! Greedy edge acceptance over the disjoint-set.

use super::sort::EdgeSupplier;
use super::union_find::UnionFind;
use crate::types::CostSplit;

/// How much of the forest was actually built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestStats {
    /// Bridges accepted into the forest.
    pub accepted: usize,
    /// Connectivity classes remaining after the run; `1` when the input
    /// graph was connected.
    pub components: usize,
}

/// Consume the supplier highest-first, accepting every bridge that joins two
/// distinct classes and discarding cycle-closing ones.
///
/// Stops as soon as `islands - 1` bridges are accepted; a disconnected input
/// simply drains the supplier and leaves the forest partial.
pub(crate) fn accumulate(
    islands: usize,
    mut supplier: impl EdgeSupplier,
) -> (CostSplit, ForestStats) {
    let mut classes = UnionFind::new(islands);
    let mut split = CostSplit::default();
    let mut accepted = 0;

    while let Some(bridge) = supplier.next_highest() {
        let a = classes.find(bridge.from);
        let b = classes.find(bridge.to);
        if a == b {
            continue;
        }
        classes.union_roots(a, b);
        split.add(bridge.color, bridge.cost);
        accepted += 1;
        if accepted + 1 == islands {
            break;
        }
    }

    (
        split,
        ForestStats {
            accepted,
            components: islands - accepted,
        },
    )
}
