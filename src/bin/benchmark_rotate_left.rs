//! Benchmark suite for left rotation.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin benchmark_rotate_left              # Run all benchmarks
//! cargo run --release --bin benchmark_rotate_left -- --json    # JSON output
//! cargo run --release --bin benchmark_rotate_left -- --filter Shift  # Filter by pattern
//! cargo run --release --bin benchmark_rotate_left -- --list-tests    # List available tests
//! ```
//!
//! # Benchmark Categories
//!
//! - **Size**: Scaling from 1K to 4M elements at a fixed count of 1200
//! - **Shift**: Counts from 0 to `usize::MAX` at a fixed length; timings should
//!   not depend on the count
//! - **Method**: Fresh vector vs preallocated buffer vs in place
//!
//! # Metrics
//!
//! - **Timing**: mean, median, std dev, min, max, p95 (in milliseconds)
//! - **Throughput**: million elements per second (ME/s)

use std::cell::RefCell;
use std::fs::File;
use std::hint::black_box;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use array_rotate::{OpRotateLeft, bench_utils, rotate_left};
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};
use serde::Serialize;

/// Results from a single benchmark run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchmarkResult {
    test_name: String,
    mean_time_ms: f64,
    median_time_ms: f64,
    standard_deviation: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    p95_time_ms: f64,
    iterations: usize,

    len: usize,
    shift: String,
    method: String,
    output_bytes: usize,

    elements_per_second: f64,
    million_elements_per_second: f64,
}

#[derive(Serialize)]
struct Report<'a> {
    results: &'a [BenchmarkResult],
}

/// Statistical functions for benchmark analysis.
struct StatisticalAnalysis;

impl StatisticalAnalysis {
    fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    fn standard_deviation(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
            / (values.len() - 1) as f64;
        variance.sqrt()
    }

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    fn median(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let sorted = Self::sorted(values);
        let n = sorted.len();
        if n.is_multiple_of(2) {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        }
    }

    /// Computes the p-th percentile using linear interpolation.
    ///
    /// `p` is in [0, 1]. For p95, pass 0.95.
    fn percentile(values: &[f64], p: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let sorted = Self::sorted(values);
        if p <= 0.0 {
            return sorted[0];
        }
        if p >= 1.0 {
            return sorted[sorted.len() - 1];
        }
        let pos = p * (sorted.len() as f64 - 1.0);
        let i = pos.floor() as usize;
        let frac = pos - i as f64;
        if i + 1 >= sorted.len() {
            return sorted[i];
        }
        sorted[i] * (1.0 - frac) + sorted[i + 1] * frac
    }
}

/// Executes a benchmark: setup once, warmup iterations, then timed iterations.
fn run_benchmark<S, B>(
    test_name: &str,
    mut setup_fn: S,
    mut bench_fn: B,
    iterations: usize,
    warmups: usize,
) -> BenchmarkResult
where
    S: FnMut(),
    B: FnMut(),
{
    let mut times = Vec::with_capacity(iterations);

    setup_fn();

    for _ in 0..warmups {
        bench_fn();
    }

    for _ in 0..iterations {
        let start = Instant::now();
        bench_fn();
        times.push(duration_to_ms(start.elapsed()));
    }

    BenchmarkResult {
        test_name: test_name.to_string(),
        mean_time_ms: StatisticalAnalysis::mean(&times),
        median_time_ms: StatisticalAnalysis::median(&times),
        standard_deviation: StatisticalAnalysis::standard_deviation(&times),
        min_time_ms: times.iter().copied().fold(f64::INFINITY, f64::min),
        max_time_ms: times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        p95_time_ms: StatisticalAnalysis::percentile(&times, 0.95),
        iterations,
        ..BenchmarkResult::default()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Method {
    Allocate,
    Preallocated,
    InPlace,
}

impl Method {
    const ALL: [Method; 3] = [Method::Allocate, Method::Preallocated, Method::InPlace];

    fn as_str(self) -> &'static str {
        match self {
            Method::Allocate => "alloc",
            Method::Preallocated => "prealloc",
            Method::InPlace => "inplace",
        }
    }
}

/// Configuration for a single rotation benchmark.
#[derive(Clone, Copy)]
struct RotationBenchmarkConfig {
    len: usize,
    shift: usize,
    method: Method,
    iterations: usize,
    warmups: usize,
}

/// Orchestrates the full benchmark suite with filtering and output formatting.
struct BenchmarkSuite {
    results: Vec<BenchmarkResult>,
    filter: String,
    iterations: usize,
}

impl BenchmarkSuite {
    fn new(iterations: usize) -> Self {
        Self {
            results: Vec::new(),
            filter: String::new(),
            iterations,
        }
    }

    fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    fn should_run_test(&self, test_name: &str) -> bool {
        self.filter.is_empty() || test_name.contains(&self.filter)
    }

    fn run_all(&mut self, json_output: bool, output_file: Option<String>) -> io::Result<()> {
        if !json_output {
            println!("=== rotate_left Benchmark Suite ===\n");
        }

        self.benchmark_by_size(json_output);
        self.benchmark_by_shift(json_output);
        self.benchmark_by_method(json_output);

        if json_output {
            let json = serde_json::to_string_pretty(&Report {
                results: &self.results,
            })
            .map_err(io::Error::other)?;
            if let Some(path) = output_file {
                let mut file = File::create(&path)?;
                file.write_all(json.as_bytes())?;
                info!("wrote {} results to {path}", self.results.len());
            } else {
                println!("{json}");
            }
        } else {
            self.print_report();
        }

        Ok(())
    }

    fn list_tests(&self) {
        let mut names = Vec::new();
        names.extend(test_names_by_size());
        names.extend(test_names_by_shift());
        names.extend(test_names_by_method());
        names.sort();
        for name in names {
            println!("{name}");
        }
    }

    /// Runs a single rotation benchmark.
    ///
    /// Uses RefCell to share buffers between setup and benchmark closures.
    fn run_rotation_benchmark(
        &self,
        test_name: &str,
        config: RotationBenchmarkConfig,
    ) -> BenchmarkResult {
        let RotationBenchmarkConfig {
            len,
            shift,
            method,
            iterations,
            warmups,
        } = config;
        let input = RefCell::new(Vec::new());
        let output = RefCell::new(Vec::new());
        let op = OpRotateLeft::new(shift);

        let setup = || {
            *input.borrow_mut() = bench_utils::create_test_sequence(len);
            *output.borrow_mut() = vec![0u64; len];
        };

        let bench = || match method {
            Method::Allocate => {
                let input_ref = input.borrow();
                black_box(rotate_left(black_box(input_ref.as_slice()), shift));
            }
            Method::Preallocated => {
                let input_ref = input.borrow();
                let mut output_ref = output.borrow_mut();
                if let Err(err) =
                    op.apply_to_preallocated(input_ref.as_slice(), output_ref.as_mut_slice())
                {
                    error!("{test_name}: {err}");
                }
                black_box(output_ref.as_mut_slice());
            }
            Method::InPlace => {
                let mut data = input.borrow_mut();
                op.apply_in_place(black_box(data.as_mut_slice()));
            }
        };

        debug!("running {test_name}");
        let mut result = run_benchmark(test_name, setup, bench, iterations, warmups);
        result.len = len;
        result.shift = bench_utils::shift_to_string(shift);
        result.method = method.as_str().to_string();
        result.output_bytes = if method == Method::InPlace {
            0
        } else {
            len * size_of::<u64>()
        };
        fill_throughput(&mut result);
        result
    }

    fn run_case(&mut self, test_name: String, config: RotationBenchmarkConfig, silent: bool) {
        if !self.should_run_test(&test_name) {
            return;
        }
        let result = self.run_rotation_benchmark(&test_name, config);
        if !silent {
            println!(
                "  {:<32} {:>10.3} ms  {:>10.1} ME/s",
                result.test_name, result.mean_time_ms, result.million_elements_per_second
            );
        }
        self.results.push(result);
    }

    /// Measures scaling behavior with the length at a fixed count.
    fn benchmark_by_size(&mut self, silent: bool) {
        if !silent {
            println!("--- Benchmark: Size Scaling (shift 1200) ---");
        }
        for (len, name) in bench_utils::BENCH_SIZES.into_iter().zip(test_names_by_size()) {
            let config = RotationBenchmarkConfig {
                len,
                shift: 1200,
                method: Method::Preallocated,
                iterations: self.iterations,
                warmups: 3,
            };
            self.run_case(name, config, silent);
        }
        if !silent {
            println!();
        }
    }

    /// Shows that the count does not change the cost.
    fn benchmark_by_shift(&mut self, silent: bool) {
        if !silent {
            println!(
                "--- Benchmark: Shift Independence ({} elements) ---",
                bench_utils::BENCH_LEN
            );
        }
        for (shift, name) in bench_utils::BENCH_SHIFTS.into_iter().zip(test_names_by_shift()) {
            let config = RotationBenchmarkConfig {
                len: bench_utils::BENCH_LEN,
                shift,
                method: Method::Allocate,
                iterations: self.iterations,
                warmups: 3,
            };
            self.run_case(name, config, silent);
        }
        if !silent {
            println!();
        }
    }

    fn benchmark_by_method(&mut self, silent: bool) {
        if !silent {
            println!(
                "--- Benchmark: Method ({} elements, shift 1200) ---",
                bench_utils::BENCH_LEN
            );
        }
        for (method, name) in Method::ALL.into_iter().zip(test_names_by_method()) {
            let config = RotationBenchmarkConfig {
                len: bench_utils::BENCH_LEN,
                shift: 1200,
                method,
                iterations: self.iterations,
                warmups: 3,
            };
            self.run_case(name, config, silent);
        }
        if !silent {
            println!();
        }
    }

    fn print_report(&self) {
        println!("================================================================");
        println!("                    DETAILED RESULTS");
        println!("================================================================\n");
        println!(
            "{:<32} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12}",
            "Test Name", "Mean (ms)", "Median", "Std Dev", "Min", "Max", "P95", "ME/s"
        );
        println!("{}", "-".repeat(116));
        for r in &self.results {
            println!(
                "{:<32} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {:<12.1}",
                r.test_name,
                r.mean_time_ms,
                r.median_time_ms,
                r.standard_deviation,
                r.min_time_ms,
                r.max_time_ms,
                r.p95_time_ms,
                r.million_elements_per_second
            );
        }
    }
}

fn fill_throughput(result: &mut BenchmarkResult) {
    if result.mean_time_ms > 0.0 {
        result.elements_per_second = result.len as f64 / (result.mean_time_ms / 1000.0);
        result.million_elements_per_second = result.elements_per_second / 1_000_000.0;
    }
}

fn test_names_by_size() -> Vec<String> {
    bench_utils::BENCH_SIZES
        .iter()
        .map(|len| format!("Size_{len}"))
        .collect()
}

fn test_names_by_shift() -> Vec<String> {
    bench_utils::BENCH_SHIFTS
        .iter()
        .map(|shift| format!("Shift_{}", bench_utils::shift_to_string(*shift)))
        .collect()
}

fn test_names_by_method() -> Vec<String> {
    Method::ALL
        .iter()
        .map(|method| format!("Method_{}_{}", method.as_str(), bench_utils::BENCH_LEN))
        .collect()
}

fn duration_to_ms(dur: Duration) -> f64 {
    dur.as_secs_f64() * 1000.0
}

#[derive(Parser, Debug)]
#[command(
    name = "benchmark_rotate_left",
    about = "Timing suite for left rotation",
    version
)]
struct Cli {
    /// Output results in JSON format.
    #[arg(long)]
    json: bool,
    /// Write results to file (default: stdout).
    #[arg(long)]
    output: Option<String>,
    /// Run only tests whose name contains this pattern.
    #[arg(long)]
    filter: Option<String>,
    /// List all available tests.
    #[arg(long)]
    list_tests: bool,
    /// Timed iterations per test.
    #[arg(long, default_value_t = 50)]
    iterations: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut suite = BenchmarkSuite::new(cli.iterations);

    if cli.list_tests {
        suite.list_tests();
        return ExitCode::SUCCESS;
    }

    if let Some(filter) = cli.filter {
        suite.set_filter(filter);
    }

    match suite.run_all(cli.json, cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
