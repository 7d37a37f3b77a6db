//! `smsp_solver <instance-file> [seed]` — runs pure-greedy construction, RVND applied once to the
//! greedy schedule, and a full GRASP+ILS run, printing the penalty, wall-clock time and schedule
//! for each phase. This binary is a thin I/O wrapper: all algorithmic logic lives in the library.
use std::env;
use std::process::ExitCode;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use smsp_sdstwt_solver::construction::greedy_construction;
use smsp_sdstwt_solver::domain::ProblemInstance;
use smsp_sdstwt_solver::io::parse_instance_file;
use smsp_sdstwt_solver::neighborhoods::{Neighborhood, Reinsertion, Swap, TwoOpt};
use smsp_sdstwt_solver::schedule::{evaluate, ScheduleData};
use smsp_sdstwt_solver::search::{grasp, rvnd::rvnd, GraspConfig};

/// Known optima for the 16 named `n60*` benchmark instances. Not part of the core library — the
/// reference keeps this table in the CLI driver, since it names a fixed benchmark set rather than
/// describing the solver itself.
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

fn known_optimum(instance_file: &str) -> Option<f64> {
    let stem = std::path::Path::new(instance_file).file_stem()?.to_str()?;
    KNOWN_OPTIMA.iter().find(|(name, _)| *name == stem).map(|(_, penalty)| *penalty)
}

fn print_gap(phase: &str, found: f64, optimal: Option<f64>) {
    let Some(optimal) = optimal else { return };
    println!("OPTIMAL_PENALTY: {optimal}");
    if optimal == 0.0 {
        println!("{phase}_GAP: N/A");
    } else {
        let gap = 100.0 * (found - optimal) / optimal;
        println!("{phase}_GAP: {gap}%");
    }
}

fn schedule_to_string(schedule: &[usize]) -> String {
    schedule.iter().map(|&job| (job + 1).to_string()).collect::<Vec<_>>().join(",")
}

fn run(instance: &ProblemInstance, instance_file: &str, seed: u64) {
    let optimum = known_optimum(instance_file);
    let mut rng = StdRng::seed_from_u64(seed);

    let construction_start = Instant::now();
    let construction_schedule = greedy_construction(instance, 0.0, &mut rng);
    let mut construction_data = ScheduleData::new(construction_schedule.clone());
    evaluate(&mut construction_data, instance);
    let construction_time = construction_start.elapsed();

    println!("CONSTRUCTION_PENALTY: {}", construction_data.total_penalty());
    println!("CONSTRUCTION_TIME: {} seconds", construction_time.as_secs_f64());
    println!("CONSTRUCTION_SCHEDULE: {}", schedule_to_string(&construction_schedule));
    print_gap("CONSTRUCTION", construction_data.total_penalty(), optimum);

    let rvnd_start = Instant::now();
    let mut rvnd_data = construction_data.clone();
    let swap = Swap;
    let reinsertion = Reinsertion::default();
    let two_opt = TwoOpt::default();
    let neighborhoods: [&dyn Neighborhood; 3] = [&swap, &reinsertion, &two_opt];
    rvnd(&mut rvnd_data, instance, &neighborhoods, &mut rng);
    let rvnd_time = rvnd_start.elapsed();

    println!("RVND_PENALTY: {}", rvnd_data.total_penalty());
    println!("RVND_TIME: {} seconds", rvnd_time.as_secs_f64());
    println!("RVND_SCHEDULE: {}", schedule_to_string(rvnd_data.schedule()));
    print_gap("RVND", rvnd_data.total_penalty(), optimum);

    let grasp_start = Instant::now();
    let config = GraspConfig::new();
    let (grasp_schedule, grasp_penalty) = grasp(instance, &config, &mut rng);
    let grasp_time = grasp_start.elapsed();

    println!("ILS_GRASP_PENALTY: {grasp_penalty}");
    println!("ILS_GRASP_TIME: {} seconds", grasp_time.as_secs_f64());
    println!("ILS_GRASP_SCHEDULE: {}", schedule_to_string(&grasp_schedule));
    print_gap("ILS_GRASP", grasp_penalty, optimum);

    println!("SEED_USED: {seed}");
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <instance-file> [seed]", args[0]);
        return ExitCode::FAILURE;
    }

    let instance_file = &args[1];
    let instance = match parse_instance_file(instance_file) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("\x1b[31merror:\x1b[0m {err}");
            return ExitCode::FAILURE;
        }
    };

    let seed = match args.get(2) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("\x1b[31merror:\x1b[0m seed must be a non-negative integer, found `{raw}`");
                return ExitCode::FAILURE;
            }
        },
        None => rand::thread_rng().gen(),
    };

    run(&instance, instance_file, seed);
    ExitCode::SUCCESS
}
