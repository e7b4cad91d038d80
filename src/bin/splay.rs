use anyhow::{Context, Result};
use clap::Parser;
use splay_bench::{harness, SplayConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Time repeated runs of the splay tree churn workload.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How many times to run the benchmark.
    #[arg(short = 'n', long, default_value_t = 100)]
    iterations: usize,

    /// Nodes kept in the tree.
    #[arg(long)]
    tree_size: Option<usize>,

    /// Replace-cycles per run.
    #[arg(long)]
    modifications: Option<usize>,

    /// Depth of the payload attached to every node.
    #[arg(long)]
    payload_depth: Option<u32>,

    /// Print a JSON report instead of one duration per line.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SplayConfig {
        let defaults = SplayConfig::default();
        SplayConfig {
            tree_size: self.tree_size.unwrap_or(defaults.tree_size),
            modifications: self.modifications.unwrap_or(defaults.modifications),
            payload_depth: self.payload_depth.unwrap_or(defaults.payload_depth),
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SPLAY_LOG").unwrap_or_else(|_| EnvFilter::new("splay_bench=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    let times = harness::run_splay(config, cli.iterations).context("splay benchmark failed")?;

    if cli.json {
        let mut report = harness::Report::new();
        report.add(harness::SPLAY, &times);
        println!("{}", report.to_json()?);
    } else {
        for t in &times {
            println!("{}", t.as_secs_f64());
        }
    }

    Ok(())
}
