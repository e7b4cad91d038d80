//! Timing harness and result report.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::BenchError;
use crate::workload::{SplayBenchmark, SplayConfig};

/// Benchmark name used as the report key.
pub const SPLAY: &str = "splay";

/// Call `f` `iterations` times and record the wall-clock time of each call.
/// Stops at the first error.
pub fn measure<E>(
    iterations: usize,
    mut f: impl FnMut() -> Result<(), E>,
) -> Result<Vec<Duration>, E> {
    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let started = Instant::now();
        f()?;
        times.push(started.elapsed());
    }
    Ok(times)
}

/// Setup once, time `iterations` runs, then validate.
///
/// Timings are returned only if teardown validation passes.
pub fn run_splay(config: SplayConfig, iterations: usize) -> Result<Vec<Duration>, BenchError> {
    let mut bench = SplayBenchmark::setup(config);
    let times = measure(iterations, || bench.run())?;
    bench.tear_down()?;

    let total: Duration = times.iter().sum();
    info!(iterations, total_secs = total.as_secs_f64(), "splay benchmark complete");
    Ok(times)
}

/// Aggregated results: per-benchmark iteration times in seconds, stamped
/// with the time the report was made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub date: String,
    pub results: BTreeMap<String, Vec<f64>>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            date: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            results: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, name: &str, times: &[Duration]) {
        debug!(name, samples = times.len(), "adding results to report");
        self.results
            .insert(name.to_string(), times.iter().map(Duration::as_secs_f64).collect());
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
