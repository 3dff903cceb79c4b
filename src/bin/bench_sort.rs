//! Microbenchmark comparing the two edge-ordering strategies.
//!
//! Runs the distribution (radix) and selection (heap) pipelines over
//! identical random instances, reports median wall times, and verifies the
//! two agree with each other and with the naive reference backend.
//!
//! Run (example):
//!   cargo run --release --bin bench_sort -- --sizes=100k,1m --repeats=9

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use span_split::{compute_with, validation, Bridge, Color, SortStrategy, SpanConfig, MAX_COST};
use std::hint::black_box;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Config {
    /// Bridge counts to benchmark.
    sizes: Vec<usize>,
    /// Islands per bridge (islands = max(2, size * ratio)).
    island_ratio: f64,
    repeats: usize,
    seed: u64,
    verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: vec![10_000, 100_000, 1_000_000],
            island_ratio: 0.25,
            repeats: 9,
            seed: 42,
            verify: true,
        }
    }
}

fn parse_count(s: &str) -> usize {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };
    let n: f64 = num_str.parse().expect("invalid size entry");
    (n * multiplier as f64) as usize
}

fn parse_args() -> Config {
    let mut cfg = Config::default();
    for arg in std::env::args().skip(1) {
        let mut split = arg.splitn(2, '=');
        let key = split.next().unwrap_or("");
        let val = split.next();

        match (key, val) {
            ("--sizes", Some(v)) => {
                cfg.sizes = v
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(parse_count)
                    .collect();
            }
            ("--ratio", Some(v)) => cfg.island_ratio = v.parse().expect("invalid --ratio"),
            ("--repeats", Some(v)) => cfg.repeats = v.parse().expect("invalid --repeats"),
            ("--seed", Some(v)) => cfg.seed = v.parse().expect("invalid --seed"),
            ("--no-verify", None) => cfg.verify = false,
            ("--help", _) | ("-h", _) => {
                eprintln!(
                    "bench_sort options:\n  \
--sizes=10k,100k,1m (comma list of bridge counts)\n  \
--ratio=R (islands per bridge, default 0.25)\n  \
--repeats=N (default 9)\n  \
--seed=N (default 42)\n  \
--no-verify (skip cross-checks)"
                );
                std::process::exit(0);
            }
            _ => {
                eprintln!("unknown argument: {}", arg);
                std::process::exit(1);
            }
        }
    }
    cfg
}

fn median(mut xs: Vec<f64>) -> f64 {
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = xs.len() / 2;
    if xs.len() % 2 == 0 {
        0.5 * (xs[mid - 1] + xs[mid])
    } else {
        xs[mid]
    }
}

fn random_bridges(islands: u32, count: usize, rng: &mut ChaCha8Rng) -> Vec<Bridge> {
    (0..count)
        .map(|_| {
            let from = rng.gen_range(0..islands);
            let mut to = rng.gen_range(0..islands);
            if islands > 1 && to == from {
                to = (to + 1) % islands;
            }
            let cost = rng.gen_range(1..=MAX_COST);
            let color = if rng.gen_bool(0.5) {
                Color::Red
            } else {
                Color::Blue
            };
            Bridge::new(from, to, cost, color)
        })
        .collect()
}

fn time_strategy(
    islands: u32,
    bridges: &[Bridge],
    strategy: SortStrategy,
    repeats: usize,
) -> f64 {
    let config = SpanConfig { strategy };

    // Warmup.
    black_box(compute_with(islands, bridges, config).unwrap());

    let mut times_ms = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        let start = Instant::now();
        black_box(compute_with(islands, black_box(bridges), config).unwrap());
        times_ms.push(start.elapsed().as_secs_f64() * 1e3);
    }
    median(times_ms)
}

fn main() {
    let cfg = parse_args();
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);

    println!(
        "{:>12} {:>10} {:>12} {:>12} {:>8}",
        "bridges", "islands", "radix (ms)", "heap (ms)", "ratio"
    );

    for &size in &cfg.sizes {
        let islands = ((size as f64 * cfg.island_ratio) as u32).max(2);
        let bridges = random_bridges(islands, size, &mut rng);

        if cfg.verify {
            let radix = compute_with(islands, &bridges, SpanConfig::default()).unwrap();
            let heap = compute_with(
                islands,
                &bridges,
                SpanConfig {
                    strategy: SortStrategy::Heap,
                },
            )
            .unwrap();
            assert_eq!(radix, heap, "strategies disagree on m={}", size);
            if let Err(msg) = validation::check(islands, &bridges, &radix) {
                panic!("reference check failed on m={}: {}", size, msg);
            }
        }

        let radix_ms = time_strategy(islands, &bridges, SortStrategy::Radix, cfg.repeats);
        let heap_ms = time_strategy(islands, &bridges, SortStrategy::Heap, cfg.repeats);

        println!(
            "{:>12} {:>10} {:>12.3} {:>12.3} {:>7.2}x",
            size,
            islands,
            radix_ms,
            heap_ms,
            heap_ms / radix_ms
        );
    }
}
