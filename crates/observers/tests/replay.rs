//! Runs the stall controller against replayed engine traces.

use stallguard_engine::{
    ProgressCallback, StopHandle,
    replay::{Progress, ReplayEngine, Status},
};
use stallguard_observers::stall::{Config, StallTermination};

fn stall(stall_time_limit: f64, min_gap_improvement: f64) -> StallTermination {
    StallTermination::new(Config::new(stall_time_limit, min_gap_improvement).unwrap())
}

/// A minimization whose bound rises quickly, then stalls at a gap of 2.
fn stalling_trace() -> Vec<Progress> {
    vec![
        Progress::new(0.0, 0, 1e100, -1e100),
        Progress::new(1.0, 0, 1e100, 80.0),
        Progress::new(2.0, 1, 120.0, 90.0),
        Progress::new(5.0, 2, 104.0, 96.0),
        Progress::new(9.0, 3, 102.0, 100.0),
        Progress::new(20.0, 3, 102.0, 100.0),
        Progress::new(39.0, 3, 102.0, 100.00005),
        Progress::new(40.0, 3, 102.0, 100.00005),
        Progress::new(41.0, 3, 102.0, 100.00006),
        Progress::new(50.0, 3, 102.0, 100.00008),
        Progress::new(60.0, 4, 101.0, 100.5),
    ]
}

#[test]
fn terminates_stalled_search() {
    let engine = ReplayEngine::new(stalling_trace()).unwrap();
    let mut callback = ProgressCallback::new(stall(30.0, 1e-4));

    let outcome = engine.run(&mut callback);

    // Last improvement at t=9; t=39 is exactly 30s later, t=40 is past it.
    assert_eq!(outcome.status, Status::Terminated);
    assert_eq!(outcome.stopped_at, Some(40.0));
    assert_eq!(outcome.events_delivered, 8);

    let stall = callback.into_observer();
    assert!(stall.has_requested_termination());
    assert_eq!(stall.last_gap_improvement_time(), Some(9.0));
    assert_eq!(stall.last_observed_gap(), Some(2.0));
}

#[test]
fn late_events_after_request_are_ignored() {
    let engine = ReplayEngine::new(stalling_trace()).unwrap().stop_latency(3);
    let mut callback = ProgressCallback::new(stall(30.0, 1e-4));

    let outcome = engine.run(&mut callback);

    // The t=60 event would be an improvement, but the controller already
    // asked to stop at t=40.
    assert_eq!(outcome.status, Status::Terminated);
    assert_eq!(outcome.events_delivered, 11);
    assert_eq!(outcome.stopped_at, Some(60.0));
    assert_eq!(callback.observer().last_gap_improvement_time(), Some(9.0));
    assert!(callback.stop_handle().is_requested());
}

#[test]
fn improving_search_runs_to_completion() {
    let trace: Vec<_> = (0..20)
        .map(|i| {
            let t = f64::from(i) * 10.0;
            let gap = 100.0 / f64::from(i + 1);
            Progress::new(t, 1, 100.0 + gap, 100.0)
        })
        .collect();
    let engine = ReplayEngine::new(trace).unwrap();
    let mut callback = ProgressCallback::new(stall(15.0, 1e-4));

    let outcome = engine.run(&mut callback);

    assert_eq!(outcome.status, Status::Completed);
    assert_eq!(outcome.events_delivered, 20);
    assert!(!callback.observer().has_requested_termination());
}

#[test]
fn never_terminates_without_incumbent() {
    let trace: Vec<_> = (0..50)
        .map(|i| Progress::new(f64::from(i) * 100.0, 0, 1e100, 10.0))
        .collect();
    let engine = ReplayEngine::new(trace).unwrap();
    let mut callback = ProgressCallback::new(stall(1.0, 1e-4));

    let outcome = engine.run(&mut callback);

    assert_eq!(outcome.status, Status::Completed);
    assert_eq!(callback.observer().last_gap_improvement_time(), None);
}

#[test]
fn malformed_incumbent_does_not_start_clock() {
    let trace = vec![
        Progress::new(0.0, 1, f64::NAN, 10.0),
        Progress::new(100.0, 1, f64::NAN, 10.0),
        Progress::new(200.0, 2, 12.0, 10.0),
        Progress::new(205.0, 2, 12.0, 10.0),
    ];
    let engine = ReplayEngine::new(trace).unwrap();
    let mut callback = ProgressCallback::new(stall(10.0, 1e-4));

    let outcome = engine.run(&mut callback);

    assert_eq!(outcome.status, Status::Completed);
    assert_eq!(callback.observer().last_gap_improvement_time(), Some(200.0));
}

#[test]
fn external_cancellation_leaves_controller_untouched() {
    let stop = StopHandle::new();
    let engine = ReplayEngine::new(stalling_trace()).unwrap();
    let mut callback = ProgressCallback::with_stop_handle(stall(30.0, 1e-4), stop.clone());

    stop.request();
    let outcome = engine.run(&mut callback);

    assert_eq!(outcome.status, Status::Terminated);
    assert_eq!(outcome.events_delivered, 0);
    assert!(!callback.observer().has_requested_termination());
}

#[test]
fn parallel_searches_own_their_controllers() {
    let quick_engine = ReplayEngine::new(stalling_trace()).unwrap();
    let patient_engine = ReplayEngine::new(stalling_trace()).unwrap();

    let (quick, patient) = std::thread::scope(|scope| {
        let quick = scope.spawn(|| {
            let mut callback = ProgressCallback::new(stall(5.0, 1e-4));
            (quick_engine.run(&mut callback), callback.into_observer())
        });
        let patient = scope.spawn(|| {
            let mut callback = ProgressCallback::new(stall(100.0, 1e-4));
            (patient_engine.run(&mut callback), callback.into_observer())
        });
        (
            quick.join().expect("quick search panicked"),
            patient.join().expect("patient search panicked"),
        )
    });

    // Quick: improvement at t=9, stall exceeds 5s at t=20.
    assert_eq!(quick.0.status, Status::Terminated);
    assert_eq!(quick.0.stopped_at, Some(20.0));
    assert!(quick.1.has_requested_termination());

    assert_eq!(patient.0.status, Status::Completed);
    assert_eq!(patient.1.last_gap_improvement_time(), Some(60.0));
}

#[test]
fn nan_bound_on_first_incumbent_does_not_kill_improving_search() {
    let mut trace = vec![Progress::new(0.0, 1, 100.0, f64::NAN)];
    trace.extend((1..8).map(|i| {
        let t = f64::from(i) * 5.0;
        Progress::new(t, 1, 100.0, 100.0 - 50.0 / f64::from(i))
    }));
    let engine = ReplayEngine::new(trace).unwrap();
    let mut callback = ProgressCallback::new(stall(10.0, 1e-4));

    let outcome = engine.run(&mut callback);

    assert_eq!(outcome.status, Status::Completed);
    assert_eq!(outcome.events_delivered, 8);
    let stall = callback.into_observer();
    assert!(!stall.has_requested_termination());
    assert_eq!(stall.last_gap_improvement_time(), Some(35.0));
}
