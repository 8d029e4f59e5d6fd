//! Replays a recorded branch-and-bound progress log through the stall observer.
//!
//! The trace imitates a multidimensional knapsack run (a maximization): the
//! incumbent climbs quickly, the bound tightens, and then the gap sits still
//! while the search keeps branching.
//!
//! # Usage
//!
//! ```text
//! cargo run --example replay
//! cargo run --example replay -- 20
//! cargo run --example replay -- 20 0.5
//! ```
//!
//! The optional arguments are the stall time limit in seconds (default 50) and
//! the minimum gap improvement in objective units (default 1e-4).

use std::error::Error;

use stallguard_engine::{
    ProgressCallback,
    replay::{Progress, ReplayEngine, Status},
};
use stallguard_observers::stall::{Config, StallTermination};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let defaults = Config::default();

    let stall_time_limit = parse_arg(args.next(), defaults.stall_time_limit());
    let min_gap_improvement = parse_arg(args.next(), defaults.min_gap_improvement());

    let config = Config::new(stall_time_limit, min_gap_improvement)?;
    let engine = ReplayEngine::new(knapsack_log())?;
    let mut callback = ProgressCallback::new(StallTermination::new(config));

    let outcome = engine.run(&mut callback);
    let stall = callback.into_observer();

    match outcome.status {
        Status::Completed => println!(
            "Search completed after {} events without a stall.",
            outcome.events_delivered
        ),
        Status::Terminated => println!(
            "Terminating optimization due to lack of sufficient gap improvement \
             (stopped at t={:.1}s after {} events).",
            outcome.stopped_at.unwrap_or_default(),
            outcome.events_delivered
        ),
    }

    let last_time = stall.last_gap_improvement_time();
    let last_gap = stall.last_observed_gap();
    if let (Some(time), Some(gap)) = (last_time, last_gap) {
        println!("Last gap improvement: t={time:.1}s, gap={gap:.4}");
    }

    Ok(())
}

fn parse_arg(arg: Option<String>, default: f64) -> f64 {
    arg.as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid argument — expected a number, e.g. 30");
            eprintln!("Usage: replay [stall_time_limit [min_gap_improvement]]");
            std::process::exit(1);
        })
        .unwrap_or(default)
}

/// Runtime, solution count, incumbent, and bound as an engine would report them.
fn knapsack_log() -> Vec<Progress> {
    [
        (0.0, 0, -1e100, 1e100),
        (0.4, 0, -1e100, 9_450.0),
        (1.1, 1, 8_120.0, 9_310.0),
        (3.0, 2, 8_860.0, 9_205.0),
        (7.5, 4, 9_012.0, 9_170.0),
        (12.0, 5, 9_058.0, 9_151.0),
        (18.0, 6, 9_071.0, 9_140.0),
        (26.0, 6, 9_071.0, 9_136.5),
        (35.0, 7, 9_082.0, 9_134.0),
        (47.0, 7, 9_082.0, 9_133.2),
        (60.0, 7, 9_082.0, 9_132.9),
        (74.0, 7, 9_082.0, 9_132.9),
        (85.0, 7, 9_082.0, 9_132.9),
        (90.0, 7, 9_082.0, 9_132.9),
        (102.0, 7, 9_082.0, 9_132.9),
        (118.0, 8, 9_084.0, 9_132.9),
        (131.0, 8, 9_084.0, 9_132.9),
        (150.0, 8, 9_084.0, 9_132.9),
        (168.0, 8, 9_084.0, 9_132.9),
        (185.0, 8, 9_084.0, 9_132.9),
    ]
    .into_iter()
    .map(|(runtime, count, objective, bound)| Progress::new(runtime, count, objective, bound))
    .collect()
}
