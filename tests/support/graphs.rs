#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use span_split::{Bridge, Color, MAX_COST};
use std::collections::BinaryHeap;

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    if rng.gen_bool(0.5) {
        Color::Red
    } else {
        Color::Blue
    }
}

/// Generate `count` distinct random candidate bridges (no self-loops, no
/// parallel pairs). `count` must be achievable for the island count.
pub fn random_bridges(islands: u32, count: usize, seed: u64) -> Vec<Bridge> {
    let max_pairs = islands as u64 * (islands as u64 - 1) / 2;
    assert!(count as u64 <= max_pairs, "too many bridges requested");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen = FxHashSet::default();
    let mut bridges = Vec::with_capacity(count);

    while bridges.len() < count {
        let from = rng.gen_range(0..islands);
        let to = rng.gen_range(0..islands);
        if from == to {
            continue;
        }
        let key = if from < to { (from, to) } else { (to, from) };
        if !seen.insert(key) {
            continue;
        }
        bridges.push(Bridge::new(
            from,
            to,
            rng.gen_range(1..=MAX_COST),
            random_color(&mut rng),
        ));
    }
    bridges
}

/// Generate a connected instance: a random spanning tree plus `extra`
/// additional random bridges.
pub fn connected_bridges(islands: u32, extra: usize, seed: u64) -> Vec<Bridge> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bridges = Vec::with_capacity(islands as usize - 1 + extra);

    // Attach each island to a random earlier one.
    for island in 1..islands {
        let anchor = rng.gen_range(0..island);
        bridges.push(Bridge::new(
            anchor,
            island,
            rng.gen_range(1..=MAX_COST),
            random_color(&mut rng),
        ));
    }

    for _ in 0..extra {
        let from = rng.gen_range(0..islands);
        let mut to = rng.gen_range(0..islands);
        if islands > 1 && to == from {
            to = (to + 1) % islands;
        }
        bridges.push(Bridge::new(
            from,
            to,
            rng.gen_range(1..=MAX_COST),
            random_color(&mut rng),
        ));
    }
    bridges
}

/// Maximum-spanning-forest weight by Prim's algorithm, an independent
/// method sharing nothing with the crate's Kruskal pipeline.
pub fn prim_forest_weight(islands: u32, bridges: &[Bridge]) -> u64 {
    let n = islands as usize;
    let mut adjacency = vec![Vec::new(); n];
    for bridge in bridges {
        if bridge.from != bridge.to {
            adjacency[bridge.from as usize].push((bridge.to as usize, bridge.cost));
            adjacency[bridge.to as usize].push((bridge.from as usize, bridge.cost));
        }
    }

    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut total = 0u64;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        for &(next, cost) in &adjacency[start] {
            heap.push((cost, next));
        }
        while let Some((cost, island)) = heap.pop() {
            if visited[island] {
                continue;
            }
            visited[island] = true;
            total += cost as u64;
            for &(next, next_cost) in &adjacency[island] {
                if !visited[next] {
                    heap.push((next_cost, next));
                }
            }
        }
    }
    total
}

/// Number of connected components of the graph over all candidate bridges.
pub fn component_count(islands: u32, bridges: &[Bridge]) -> usize {
    component_labels(islands, bridges)
        .iter()
        .collect::<FxHashSet<_>>()
        .len()
}

/// Flood-fill component label for every island.
pub fn component_labels(islands: u32, bridges: &[Bridge]) -> Vec<u32> {
    let n = islands as usize;
    let mut adjacency = vec![Vec::new(); n];
    for bridge in bridges {
        adjacency[bridge.from as usize].push(bridge.to as usize);
        adjacency[bridge.to as usize].push(bridge.from as usize);
    }

    let mut labels = vec![u32::MAX; n];
    let mut stack = Vec::new();
    let mut next_label = 0;

    for start in 0..n {
        if labels[start] != u32::MAX {
            continue;
        }
        labels[start] = next_label;
        stack.push(start);
        while let Some(island) = stack.pop() {
            for &next in &adjacency[island] {
                if labels[next] == u32::MAX {
                    labels[next] = next_label;
                    stack.push(next);
                }
            }
        }
        next_label += 1;
    }
    labels
}
