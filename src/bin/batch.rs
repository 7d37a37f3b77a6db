//! `smsp_batch <instance-directory> [--benchmark]` — runs GRASP+ILS over every known benchmark
//! instance in a directory and prints a summary table. Supplements spec.md's library core with
//! the original reference's batch driver (see `original_source/src/main.cpp`); contains no
//! algorithmic logic of its own, only orchestration and reporting.
use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use smsp_sdstwt_solver::io::parse_instance_file;
use smsp_sdstwt_solver::search::{grasp, GraspConfig};

const KNOWN_OPTIMA: &[(&str, f64)] = &[
    ("n60A", 453.0),
    ("n60B", 1757.0),
    ("n60C", 0.0),
    ("n60D", 69102.0),
    ("n60E", 58935.0),
    ("n60F", 93045.0),
    ("n60G", 64632.0),
    ("n60H", 145007.0),
    ("n60I", 43286.0),
    ("n60J", 53555.0),
    ("n60K", 458752.0),
    ("n60L", 332941.0),
    ("n60M", 516926.0),
    ("n60N", 492572.0),
    ("n60O", 527459.0),
    ("n60P", 396183.0),
];

const BENCHMARK_RUNS: u32 = 10;

struct Summary {
    instance_name: String,
    optimal_penalty: f64,
    grasp_ils_penalty: f64,
    gap_percent: f64,
    exec_time_seconds: f64,
}

fn known_optimum(instance_name: &str) -> Option<f64> {
    KNOWN_OPTIMA.iter().find(|(name, _)| *name == instance_name).map(|(_, penalty)| *penalty)
}

fn run_one(instance_path: &std::path::Path, instance_name: &str, optimal_penalty: f64, runs: u32) -> Summary {
    let instance = parse_instance_file(instance_path).unwrap_or_else(|err| {
        eprintln!("\x1b[31merror:\x1b[0m {err}");
        std::process::exit(1);
    });

    let mut total_penalty = 0.0;
    let mut total_time = 0.0;

    for run in 0..runs {
        let config = GraspConfig::new();
        let mut rng = StdRng::seed_from_u64(run as u64);

        let start = Instant::now();
        let (_, penalty) = grasp(&instance, &config, &mut rng);
        let elapsed = start.elapsed().as_secs_f64();

        total_penalty += penalty;
        total_time += elapsed;
    }

    let average_penalty = total_penalty / runs as f64;
    let average_time = total_time / runs as f64;
    let gap = if optimal_penalty == 0.0 {
        0.0
    } else {
        100.0 * (average_penalty - optimal_penalty) / optimal_penalty
    };

    Summary {
        instance_name: instance_name.to_string(),
        optimal_penalty,
        grasp_ils_penalty: average_penalty,
        gap_percent: gap,
        exec_time_seconds: average_time,
    }
}

fn print_table(summaries: &[Summary]) {
    println!(
        "{:<10}{:>15}{:>20}{:>15}{:>15}",
        "Instance", "Optimal", "GRASP+ILS Penalty", "Gap", "Exec Time"
    );
    for summary in summaries {
        println!(
            "{:<10}{:>15}{:>20}{:>14.2}%{:>15.4}",
            summary.instance_name,
            summary.optimal_penalty,
            summary.grasp_ils_penalty,
            summary.gap_percent,
            summary.exec_time_seconds
        );
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <instance-directory> [--benchmark]", args[0]);
        return ExitCode::FAILURE;
    }

    let directory = &args[1];
    let benchmark = args.get(2).map(|flag| flag == "--benchmark").unwrap_or(false);
    let runs = if benchmark { BENCHMARK_RUNS } else { 1 };

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("\x1b[31merror:\x1b[0m could not read directory `{directory}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut summaries = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let Some(instance_name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let Some(optimal_penalty) = known_optimum(instance_name) else {
            eprintln!("\x1b[31mwarning:\x1b[0m no known optimum for instance `{instance_name}`, skipping");
            continue;
        };

        println!("Processing file: {}", path.display());
        summaries.push(run_one(&path, instance_name, optimal_penalty, runs));
    }

    summaries.sort_by(|a, b| a.instance_name.cmp(&b.instance_name));
    print_table(&summaries);

    ExitCode::SUCCESS
}
