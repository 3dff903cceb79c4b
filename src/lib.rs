//! Spanning-forest cost split for two-color bridge networks.
//!
//! Given islands connected by candidate bridges, each owned by one of two
//! companies ("red" and "blue"), this crate runs Kruskal's greedy acceptance
//! from the highest-cost bridge downward and reports how much of the
//! resulting spanning forest's weight each company contributes.
//!
//! # Example
//!
//! ```
//! use span_split::{compute, Bridge, Color};
//!
//! // Four islands in a ring; endpoints are 0-based at this API.
//! let bridges = vec![
//!     Bridge::new(0, 1, 5, Color::Red),
//!     Bridge::new(1, 2, 3, Color::Blue),
//!     Bridge::new(2, 3, 8, Color::Red),
//!     Bridge::new(0, 3, 1, Color::Blue),
//! ];
//!
//! let output = compute(4, &bridges).expect("computation should succeed");
//! assert_eq!(output.split.red, 13);
//! assert_eq!(output.split.blue, 3);
//! ```

mod decode;
mod error;
mod report;
mod types;
pub mod validation;

// Internal module
pub(crate) mod forest;

pub use decode::{parse_instance, Instance};
pub use error::SpanError;
pub use forest::{ForestStats, SortStrategy};
pub use report::write_split;
pub use types::{Bridge, Color, CostSplit, MAX_COST};

/// Output from a spanning-forest computation: the split plus diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanOutput {
    /// Per-color cost totals of the accepted bridges.
    pub split: CostSplit,
    /// How much of the forest was built. A disconnected input is a supported
    /// case, visible here as `components > 1`.
    pub stats: ForestStats,
}

/// Configuration for the spanning-forest computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanConfig {
    /// Edge-ordering strategy for the greedy loop. Both strategies produce
    /// identical totals; `Radix` is the linear-time default.
    pub strategy: SortStrategy,
}

/// Compute the spanning-forest cost split with default settings.
///
/// Errors are reserved for invalid inputs (no islands, endpoints or costs
/// out of range); over well-formed input the computation always produces a
/// result.
pub fn compute(islands: u32, bridges: &[Bridge]) -> Result<SpanOutput, SpanError> {
    compute_with(islands, bridges, SpanConfig::default())
}

/// Compute the spanning-forest cost split with explicit configuration.
pub fn compute_with(
    islands: u32,
    bridges: &[Bridge],
    config: SpanConfig,
) -> Result<SpanOutput, SpanError> {
    if islands == 0 {
        return Err(SpanError::NoIslands);
    }

    for (i, bridge) in bridges.iter().enumerate() {
        let endpoint = if bridge.from >= islands {
            Some(bridge.from)
        } else if bridge.to >= islands {
            Some(bridge.to)
        } else {
            None
        };
        if let Some(endpoint) = endpoint {
            return Err(SpanError::EndpointOutOfRange {
                bridge: i,
                // Reported in the 1-based convention of the input format.
                endpoint: endpoint as u64 + 1,
                islands,
            });
        }
        if bridge.cost == 0 || bridge.cost > MAX_COST {
            return Err(SpanError::CostOutOfRange {
                bridge: i,
                cost: bridge.cost as u64,
            });
        }
    }

    let (split, stats) =
        forest::max_spanning_split(islands as usize, bridges.to_vec(), config.strategy);
    Ok(SpanOutput { split, stats })
}
