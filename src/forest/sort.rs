//! Edge ordering strategies for the greedy acceptance loop.
//!
//! The accumulator needs exactly one capability: hand over the not-yet-consumed
//! bridge with the highest tagged key. Two interchangeable suppliers provide
//! it, a two-pass distribution (radix) sort over the 16-bit key and an
//! in-place max-heap. Both deliver the same multiset in non-increasing key
//! order and may differ only in how equal-key bridges tie-break, which the
//! accumulated totals are insensitive to.

use crate::types::{Bridge, Color};

/// Key bits consumed per distribution pass.
const RADIX_BITS: u32 = 8;
/// Bins per distribution pass.
const RADIX_SIZE: usize = 1 << RADIX_BITS;
/// Distribution passes covering the full 16-bit tagged key.
const RADIX_LEVELS: usize = 2;
const RADIX_MASK: u16 = (RADIX_SIZE - 1) as u16;

/// Bit folded into the sort key for red bridges.
///
/// Costs are bounded by `MAX_COST < 1 << 14`, so bit 14 is free. The tag
/// exists only inside this module; totals always read the untagged `cost`.
const RED_MARK: u16 = 1 << 14;

#[inline]
fn sort_key(bridge: &Bridge) -> u16 {
    match bridge.color {
        Color::Red => bridge.cost | RED_MARK,
        Color::Blue => bridge.cost,
    }
}

/// Hands out candidate bridges in non-increasing tagged-key order.
pub(crate) trait EdgeSupplier {
    fn next_highest(&mut self) -> Option<Bridge>;
}

/// Distribution-sorted supplier: radix-sorts the whole list up front, then
/// walks the ascending result back to front.
pub(crate) struct RadixSupplier {
    ascending: Vec<Bridge>,
}

impl RadixSupplier {
    pub fn new(bridges: Vec<Bridge>) -> Self {
        Self {
            ascending: radix_sort_ascending(bridges),
        }
    }
}

impl EdgeSupplier for RadixSupplier {
    #[inline]
    fn next_highest(&mut self) -> Option<Bridge> {
        self.ascending.pop()
    }
}

/// Sort ascending by tagged key.
///
/// One pass fills the frequency histograms for both key bytes at once, then
/// each level turns its histogram into prefix-sum offsets and redistributes
/// elements between the working buffer and a same-size scratch buffer.
/// `RADIX_LEVELS` is even, so the final pass lands the data back in the
/// buffer that is returned.
fn radix_sort_ascending(mut bridges: Vec<Bridge>) -> Vec<Bridge> {
    if bridges.len() < 2 {
        return bridges;
    }

    let mut frequencies = [[0usize; RADIX_SIZE]; RADIX_LEVELS];
    for bridge in &bridges {
        let mut key = sort_key(bridge);
        for level in frequencies.iter_mut() {
            level[(key & RADIX_MASK) as usize] += 1;
            key >>= RADIX_BITS;
        }
    }

    let mut scratch = bridges.clone();
    for (level, counts) in frequencies.iter().enumerate() {
        let mut offsets = [0usize; RADIX_SIZE];
        let mut next = 0;
        for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
            *offset = next;
            next += count;
        }

        let shift = level as u32 * RADIX_BITS;
        for &bridge in bridges.iter() {
            let bin = ((sort_key(&bridge) >> shift) & RADIX_MASK) as usize;
            scratch[offsets[bin]] = bridge;
            offsets[bin] += 1;
        }
        std::mem::swap(&mut bridges, &mut scratch);
    }

    debug_assert!(bridges
        .windows(2)
        .all(|pair| sort_key(&pair[0]) <= sort_key(&pair[1])));
    bridges
}

/// Selection supplier: builds a max-heap over the array in place and extracts
/// the maximum on demand, restoring the heap invariant over the shrinking
/// active prefix.
pub(crate) struct HeapSupplier {
    heap: Vec<Bridge>,
}

impl HeapSupplier {
    pub fn new(bridges: Vec<Bridge>) -> Self {
        let mut heap = bridges;
        let n = heap.len();
        // Floyd construction: sift down every internal node, deepest first.
        for node in (0..n / 2).rev() {
            sift_down(&mut heap, node);
        }
        Self { heap }
    }
}

impl EdgeSupplier for HeapSupplier {
    fn next_highest(&mut self) -> Option<Bridge> {
        let len = self.heap.len();
        if len == 0 {
            return None;
        }
        self.heap.swap(0, len - 1);
        let max = self.heap.pop();
        sift_down(&mut self.heap, 0);
        max
    }
}

fn sift_down(heap: &mut [Bridge], mut node: usize) {
    let len = heap.len();
    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }
        let mut largest = node;
        if sort_key(&heap[left]) > sort_key(&heap[largest]) {
            largest = left;
        }
        let right = left + 1;
        if right < len && sort_key(&heap[right]) > sort_key(&heap[largest]) {
            largest = right;
        }
        if largest == node {
            break;
        }
        heap.swap(node, largest);
        node = largest;
    }
}
