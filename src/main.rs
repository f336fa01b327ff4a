//! Loop Benchmarks - standalone report
//!
//! Run: cargo run --release -- --sizes 100,10000
//!
//! Times every iteration strategy per input size and reports ns/op and
//! allocated bytes/op. Progress is logged to stderr (RUST_LOG overrides).

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loop_bench::{CountingAllocator, Measurement, RunConfig, Runner, SUPPORTED_SIZES};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[derive(Debug, Parser)]
#[command(name = "loop-bench", about = "Compare the traversal cost of iteration strategies")]
struct Cli {
    /// Input sizes to measure, comma separated (default: all supported sizes)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    sizes: Vec<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = if cli.sizes.is_empty() {
        RunConfig::default()
    } else {
        RunConfig::from_sizes(&cli.sizes).with_context(|| {
            format!("invalid benchmark configuration (supported sizes: {SUPPORTED_SIZES:?})")
        })?
    };

    println!();
    println!("================================================================");
    println!("  Loop Benchmarks (Rust)");
    println!("================================================================");
    println!();
    println!(
        "{:<20} {:>10} {:>10} {:>14} {:>14}",
        "Strategy", "Size", "Iters", "ns/op", "bytes/op"
    );

    Runner::new(config).run_with(print_measurement);

    println!();
    Ok(())
}

fn print_measurement(m: &Measurement) {
    println!(
        "{:<20} {:>10} {:>10} {:>14.1} {:>14.1}",
        m.strategy.name(),
        m.size,
        m.iterations,
        m.nanos_per_op(),
        m.bytes_per_op()
    );
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
