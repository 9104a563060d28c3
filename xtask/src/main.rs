use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

const CORE_PACKAGE: &str = "ride_core";
const BENCH_NAME: &str = "performance";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride fares workspace",
    long_about = "A unified CLI for running the ride report, exporting snapshots,\n\
                  benchmarks, and CI checks in the ride fares workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demo ride report (rides, driver summary, rider summary)
    Run,
    /// Print the demo fleet as a JSON snapshot
    Export,
    /// Run Criterion benchmarks
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the example programs
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn spawn(program: &str, args: &[&str]) -> ExitStatus {
    eprintln!("+ {program} {}", args.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("failed to execute {program}: {err}");
            exit(1);
        }
    }
}

fn run_cargo(args: &[&str]) {
    let status = spawn("cargo", args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_git(args: &[&str]) {
    let status = spawn("git", args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_example(name: &str) {
    run_cargo(&["run", "-p", CORE_PACKAGE, "--example", name]);
}

fn bench(extra: &[&str]) {
    let mut args = vec!["bench", "--package", CORE_PACKAGE, "--bench", BENCH_NAME];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test ride_core");
    run_cargo(&["test", "-p", CORE_PACKAGE]);
}

fn ci_examples() {
    step("Run ride_report");
    run_example("ride_report");

    step("Run ride_export");
    run_example("ride_export");
}

fn ci_bench() {
    step("Run benchmarks");
    bench(&[]);
}

fn bench_compare() {
    let baseline_dir = Path::new("target/criterion");
    if baseline_dir.exists() {
        step("Removing existing benchmark data");
        if let Err(err) = std::fs::remove_dir_all(baseline_dir) {
            eprintln!("failed to remove target/criterion: {err}");
            exit(1);
        }
    }

    step("Stashing current changes");
    run_git(&[
        "stash",
        "push",
        "-m",
        "Temporary stash for benchmark comparison",
    ]);

    step("Running benchmark to create baseline");
    bench(&["--save-baseline", "main"]);

    step("Reapplying changes");
    run_git(&["stash", "pop"]);

    step("Running benchmark comparing against baseline");
    bench(&["--baseline", "main"]);

    eprintln!("\nDone! Check the output above to see performance comparison.");
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => run_example("ride_report"),
        Commands::Export => run_example("ride_export"),
        Commands::Bench => bench(&[]),
        Commands::BenchCompare => bench_compare(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
