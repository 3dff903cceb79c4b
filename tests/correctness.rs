//! Correctness properties for the spanning-forest pipeline.
//!
//! These tests pit the optimized pipeline against independent references: a
//! Prim-based maximum-forest weight, flood-fill connectivity, and the
//! crate's own naive reference backend.

mod support;

use span_split::{compute, compute_with, validation, Bridge, Color, SortStrategy, SpanConfig};
use support::graphs::{
    component_count, connected_bridges, prim_forest_weight, random_bridges,
};

#[test]
fn test_total_matches_prim_reference() {
    for (islands, count, seed) in [
        (10, 20, 1u64),
        (50, 120, 2),
        (200, 600, 3),
        (500, 2000, 4),
        (300, 350, 5),
    ] {
        let bridges = random_bridges(islands, count, seed);
        let output = compute(islands, &bridges).unwrap();

        assert_eq!(
            output.split.total(),
            prim_forest_weight(islands, &bridges),
            "forest weight diverged from Prim (islands={}, bridges={}, seed={})",
            islands,
            count,
            seed
        );
    }
}

#[test]
fn test_strategies_agree_across_seeds() {
    for seed in 0..20u64 {
        let bridges = random_bridges(80, 250, seed);
        let radix = compute_with(80, &bridges, SpanConfig::default()).unwrap();
        let heap = compute_with(
            80,
            &bridges,
            SpanConfig {
                strategy: SortStrategy::Heap,
            },
        )
        .unwrap();

        assert_eq!(radix, heap, "strategies disagree for seed {}", seed);
    }
}

#[test]
fn test_matches_naive_reference() {
    for seed in 0..10u64 {
        let bridges = random_bridges(60, 150, seed);
        let output = compute(60, &bridges).unwrap();
        validation::check(60, &bridges, &output)
            .unwrap_or_else(|msg| panic!("seed {}: {}", seed, msg));
    }
}

#[test]
fn test_components_match_flood_fill() {
    // The accepted forest must connect exactly what the candidate set
    // connects: same number of classes as a flood fill over all bridges.
    for (islands, count, seed) in [(40u32, 30usize, 7u64), (100, 60, 8), (100, 250, 9)] {
        let bridges = random_bridges(islands, count, seed);
        let output = compute(islands, &bridges).unwrap();

        assert_eq!(
            output.stats.components,
            component_count(islands, &bridges),
            "component count diverged (islands={}, bridges={}, seed={})",
            islands,
            count,
            seed
        );
        assert_eq!(output.stats.accepted, islands as usize - output.stats.components);
    }
}

#[test]
fn test_connected_instances_span_fully() {
    for seed in 0..5u64 {
        let bridges = connected_bridges(120, 200, seed);
        let output = compute(120, &bridges).unwrap();

        assert_eq!(output.stats.components, 1);
        assert_eq!(output.stats.accepted, 119);
        assert_eq!(output.split.total(), prim_forest_weight(120, &bridges));
    }
}

#[test]
fn test_disconnected_partial_forest() {
    // Two separate clusters: islands 0..5 and 5..10, nothing across.
    let mut bridges = Vec::new();
    for i in 0..4u32 {
        bridges.push(Bridge::new(i, i + 1, 10, Color::Red));
        bridges.push(Bridge::new(5 + i, 6 + i, 20, Color::Blue));
    }
    let output = compute(10, &bridges).unwrap();

    assert_eq!(output.stats.components, 2);
    assert_eq!(output.stats.accepted, 8);
    assert_eq!(output.split.red, 40);
    assert_eq!(output.split.blue, 80);
}

#[test]
fn test_uniform_cost_and_color() {
    // Every bridge identical: the whole forest lands in one bucket and the
    // cycle edge is rejected.
    let bridges = vec![
        Bridge::new(0, 1, 7, Color::Blue),
        Bridge::new(1, 2, 7, Color::Blue),
        Bridge::new(2, 3, 7, Color::Blue),
        Bridge::new(3, 0, 7, Color::Blue),
    ];
    let output = compute(4, &bridges).unwrap();

    assert_eq!(output.split.red, 0);
    assert_eq!(output.split.blue, 21);
    assert_eq!(output.stats.components, 1);
}

#[test]
fn test_parallel_bridges_tie_break() {
    // Two parallel bridges with equal cost but different colors: the red
    // one wins the tie (its tagged key is higher), the blue one closes a
    // cycle and is dropped.
    let bridges = vec![
        Bridge::new(0, 1, 9, Color::Blue),
        Bridge::new(0, 1, 9, Color::Red),
    ];
    let output = compute(2, &bridges).unwrap();

    assert_eq!(output.split.red, 9);
    assert_eq!(output.split.blue, 0);
    assert_eq!(output.stats.accepted, 1);
}

#[test]
fn test_heavier_color_dominates() {
    // Red bridges strictly heavier than every blue alternative: the forest
    // should be built entirely from red bridges.
    let mut bridges = Vec::new();
    for i in 0..9u32 {
        bridges.push(Bridge::new(i, i + 1, 5_000 + i as u16, Color::Red));
        bridges.push(Bridge::new(i, i + 1, 100 + i as u16, Color::Blue));
    }
    let output = compute(10, &bridges).unwrap();

    assert_eq!(output.split.blue, 0);
    assert_eq!(output.stats.accepted, 9);
    assert_eq!(
        output.split.red,
        (0..9u64).map(|i| 5_000 + i).sum::<u64>()
    );
}

#[test]
fn test_sparse_graphs_stay_partial() {
    // Far fewer bridges than islands: most islands stay singletons, and the
    // partial forest still matches both references.
    let bridges = random_bridges(500, 50, 11);
    let output = compute(500, &bridges).unwrap();

    assert!(output.stats.components > 1);
    assert_eq!(output.split.total(), prim_forest_weight(500, &bridges));
    validation::check(500, &bridges, &output).unwrap();
}
