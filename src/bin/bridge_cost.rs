//! Compute the red/blue spanning-forest cost split for a bridge instance.
//!
//! Reads an instance (`n m`, then `m` records `from to cost company` with
//! 1-based endpoints) from stdin or a file and prints the two totals.
//!
//! Run with: cargo run --release --bin bridge_cost -- [INPUT]

use clap::Parser;
use span_split::{compute_with, parse_instance, write_split, SortStrategy, SpanConfig};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bridge_cost")]
#[command(about = "Spanning-forest cost split for two-color bridge networks")]
struct Args {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>,

    /// Edge-ordering strategy: radix or heap
    #[arg(long, default_value = "radix", value_parser = parse_strategy)]
    strategy: SortStrategy,

    /// Print acceptance/component diagnostics to stderr
    #[arg(long)]
    stats: bool,

    /// Print elapsed time to stderr
    #[arg(long)]
    timing: bool,
}

fn parse_strategy(s: &str) -> Result<SortStrategy, String> {
    match s {
        "radix" => Ok(SortStrategy::Radix),
        "heap" => Ok(SortStrategy::Heap),
        _ => Err(format!("unknown strategy '{}' (radix or heap)", s)),
    }
}

fn main() {
    let args = Args::parse();

    let mut raw = Vec::new();
    let read_result = match &args.input {
        Some(path) => std::fs::File::open(path).and_then(|mut file| file.read_to_end(&mut raw)),
        None => io::stdin().lock().read_to_end(&mut raw),
    };
    if let Err(e) = read_result {
        eprintln!("error: failed to read input: {}", e);
        std::process::exit(1);
    }

    let since = Instant::now();

    let instance = match parse_instance(&raw) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("error: invalid input: {}", e);
            std::process::exit(1);
        }
    };

    let config = SpanConfig {
        strategy: args.strategy,
    };
    let output = match compute_with(instance.islands, &instance.bridges, config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: invalid input: {}", e);
            std::process::exit(1);
        }
    };

    if args.stats {
        eprintln!(
            "islands: {}  bridges: {}  accepted: {}  components: {}",
            instance.islands,
            instance.bridges.len(),
            output.stats.accepted,
            output.stats.components
        );
    }
    if args.timing {
        eprintln!("{:.3}ms", since.elapsed().as_secs_f64() * 1e3);
    }

    if let Err(e) = write_split(io::stdout().lock(), &output.split) {
        eprintln!("error: failed to write result: {}", e);
        std::process::exit(1);
    }
}
