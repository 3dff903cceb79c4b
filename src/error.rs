//! Error types for instance decoding and computation.

use std::fmt;

use crate::types::MAX_COST;

/// Errors reported at the input boundary.
///
/// The forest core itself has no failure modes; every variant here is a
/// precondition violation caught before the core runs, either by the decoder
/// or by the `compute` entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The instance declared zero islands; the computation needs `n >= 1`.
    NoIslands,

    /// A declared count does not fit the supported index range.
    CountOutOfRange { what: &'static str, count: u64 },

    /// A bridge endpoint referenced an island outside the instance.
    /// `endpoint` uses the 1-based convention of the input format.
    EndpointOutOfRange {
        bridge: usize,
        endpoint: u64,
        islands: u32,
    },

    /// A bridge cost fell outside `1..=MAX_COST`.
    CostOutOfRange { bridge: usize, cost: u64 },

    /// The input ended before a required token.
    Truncated { expected: &'static str },

    /// An unexpected byte where a token was required.
    InvalidToken { expected: &'static str, found: u8 },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::NoIslands => {
                write!(f, "island count must be positive")
            }
            SpanError::CountOutOfRange { what, count } => {
                write!(f, "{} {} exceeds the supported range", what, count)
            }
            SpanError::EndpointOutOfRange {
                bridge,
                endpoint,
                islands,
            } => {
                write!(
                    f,
                    "bridge {}: endpoint {} out of range (instance has {} islands)",
                    bridge, endpoint, islands
                )
            }
            SpanError::CostOutOfRange { bridge, cost } => {
                write!(
                    f,
                    "bridge {}: cost {} outside 1..={}",
                    bridge, cost, MAX_COST
                )
            }
            SpanError::Truncated { expected } => {
                write!(f, "unexpected end of input while reading {}", expected)
            }
            SpanError::InvalidToken { expected, found } => {
                write!(
                    f,
                    "expected {}, found byte {:?}",
                    expected, *found as char
                )
            }
        }
    }
}

impl std::error::Error for SpanError {}
