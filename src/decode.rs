//! Input decoding for bridge instances.
//!
//! The decoder is the crate's validation boundary: the forest core assumes
//! well-formed input, so every malformed instance must be rejected here with
//! a distinct error. The wire format is `n m` followed by `m`
//! whitespace-separated `from to cost company` records, with 1-based
//! endpoints and a single lowercase company letter (`r` is red, anything
//! else blue).

use crate::error::SpanError;
use crate::types::{Bridge, Color, MAX_COST};

/// A decoded problem instance: island count plus candidate bridges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub islands: u32,
    pub bridges: Vec<Bridge>,
}

/// Parse a full instance from a byte buffer.
///
/// Endpoints are shifted from the 1-based input convention to the 0-based
/// indices the core works with. Trailing bytes after the last record are
/// ignored.
pub fn parse_instance(input: &[u8]) -> Result<Instance, SpanError> {
    let mut scanner = Scanner::new(input);

    let islands = scanner.uint("island count")?;
    if islands == 0 {
        return Err(SpanError::NoIslands);
    }
    let islands = u32::try_from(islands).map_err(|_| SpanError::CountOutOfRange {
        what: "island count",
        count: islands,
    })?;

    let count = scanner.uint("bridge count")?;
    let count = usize::try_from(count)
        .ok()
        .filter(|&c| c <= u32::MAX as usize)
        .ok_or(SpanError::CountOutOfRange {
            what: "bridge count",
            count,
        })?;

    let mut bridges = Vec::with_capacity(count);
    for bridge in 0..count {
        let from = scanner.uint("bridge endpoint")?;
        if from == 0 || from > islands as u64 {
            return Err(SpanError::EndpointOutOfRange {
                bridge,
                endpoint: from,
                islands,
            });
        }
        let to = scanner.uint("bridge endpoint")?;
        if to == 0 || to > islands as u64 {
            return Err(SpanError::EndpointOutOfRange {
                bridge,
                endpoint: to,
                islands,
            });
        }
        let cost = scanner.uint("bridge cost")?;
        if cost == 0 || cost > MAX_COST as u64 {
            return Err(SpanError::CostOutOfRange { bridge, cost });
        }
        let color = scanner.company()?;

        bridges.push(Bridge::new(
            (from - 1) as u32,
            (to - 1) as u32,
            cost as u16,
            color,
        ));
    }

    Ok(Instance { islands, bridges })
}

/// Cursor over the raw input bytes, owned by the decoder for the run.
struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.input.get(self.pos) {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Next unsigned decimal token. Accumulation saturates; out-of-range
    /// values are caught by the caller's domain checks.
    fn uint(&mut self, expected: &'static str) -> Result<u64, SpanError> {
        self.skip_whitespace();
        match self.input.get(self.pos) {
            None => return Err(SpanError::Truncated { expected }),
            Some(byte) if !byte.is_ascii_digit() => {
                return Err(SpanError::InvalidToken {
                    expected,
                    found: *byte,
                })
            }
            Some(_) => {}
        }

        let mut value: u64 = 0;
        while let Some(&byte) = self.input.get(self.pos) {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .saturating_mul(10)
                .saturating_add((byte - b'0') as u64);
            self.pos += 1;
        }
        Ok(value)
    }

    /// Next company tag: a single lowercase letter.
    fn company(&mut self) -> Result<Color, SpanError> {
        self.skip_whitespace();
        match self.input.get(self.pos) {
            None => Err(SpanError::Truncated {
                expected: "company tag",
            }),
            Some(&byte) if byte.is_ascii_lowercase() => {
                self.pos += 1;
                Ok(if byte == b'r' { Color::Red } else { Color::Blue })
            }
            Some(&byte) => Err(SpanError::InvalidToken {
                expected: "company tag",
                found: byte,
            }),
        }
    }
}
