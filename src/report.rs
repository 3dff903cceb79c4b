//! Result reporting.

use std::io::{self, Write};

use crate::types::CostSplit;

/// Write the two totals in the wire format `"<red> <blue>\n"`, red first.
pub fn write_split<W: Write>(mut out: W, split: &CostSplit) -> io::Result<()> {
    writeln!(out, "{} {}", split.red, split.blue)
}
