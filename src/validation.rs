//! Independent cross-check for the spanning-forest pipeline.
//!
//! Recomputes the split with a deliberately naive method (a comparison sort
//! plus a size-based disjoint-set) so tests and benchmarks can verify the
//! optimized pipeline against an implementation that shares none of its
//! machinery.

use std::cmp::Reverse;

use crate::types::{Bridge, Color, CostSplit};
use crate::{ForestStats, SpanOutput};

/// Naive reference computation of the split.
///
/// Preconditions match the core's: endpoints below `islands`, costs in
/// bound. Use `crate::compute` for validated input.
pub fn reference_split(islands: u32, bridges: &[Bridge]) -> SpanOutput {
    let mut order: Vec<Bridge> = bridges.to_vec();
    // Highest cost first, red before blue on ties (the tagged-key order).
    order.sort_unstable_by_key(|b| Reverse((b.cost, b.color == Color::Red)));

    let mut sets = SizedSets::new(islands as usize);
    let mut split = CostSplit::default();
    let mut accepted = 0;

    for bridge in order {
        if sets.merge(bridge.from as usize, bridge.to as usize) {
            split.add(bridge.color, bridge.cost);
            accepted += 1;
        }
    }

    SpanOutput {
        split,
        stats: ForestStats {
            accepted,
            components: islands as usize - accepted,
        },
    }
}

/// Compare an output against the reference; describes the first mismatch.
pub fn check(islands: u32, bridges: &[Bridge], output: &SpanOutput) -> Result<(), String> {
    let expected = reference_split(islands, bridges);
    if output.split != expected.split {
        return Err(format!(
            "split mismatch: got {:?}, reference {:?}",
            output.split, expected.split
        ));
    }
    if output.stats != expected.stats {
        return Err(format!(
            "stats mismatch: got {:?}, reference {:?}",
            output.stats, expected.stats
        ));
    }
    Ok(())
}

/// Size-based disjoint-set, structurally unlike the rank-based one in the
/// optimized core.
struct SizedSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl SizedSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Merge the classes of `i` and `j`; false if they were already one.
    fn merge(&mut self, i: usize, j: usize) -> bool {
        let mut i = self.find(i);
        let mut j = self.find(j);
        if i == j {
            return false;
        }
        if self.size[i] < self.size[j] {
            std::mem::swap(&mut i, &mut j);
        }
        self.parent[j] = i;
        self.size[i] += self.size[j];
        true
    }
}
