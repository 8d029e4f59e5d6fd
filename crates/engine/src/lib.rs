//! The boundary between an external search engine and stallguard observers.
//!
//! The engine itself (model construction, branch-and-bound, relaxations) is a
//! black box. This crate only describes what the engine exposes during a
//! progress callback and how a termination request travels back to it:
//!
//! - [`ProgressQuery`] — the native scalars an engine can be asked for
//! - [`Event`] — one progress event handed to an [`Observer`]
//! - [`Action`] — the control actions the engine understands
//! - [`StopHandle`] — an idempotent, cooperative stop signal
//! - [`ProgressCallback`] — the adapter an engine invokes once per event
//! - [`replay`] — an engine that replays a recorded progress trace
//!
//! # Example
//!
//! ```rust
//! use stallguard_engine::{Action, Event, ProgressCallback, replay};
//!
//! let trace = vec![
//!     replay::Progress::new(0.0, 0, 0.0, 10.0),
//!     replay::Progress::new(1.0, 1, 15.0, 10.0),
//!     replay::Progress::new(2.0, 2, 11.0, 10.0),
//! ];
//! let engine = replay::ReplayEngine::new(trace).unwrap();
//!
//! let observer = |event: &Event<'_, replay::Progress>| {
//!     let gap = event.snapshot().gap()?;
//!     (gap < 2.0).then_some(Action::Terminate)
//! };
//! let mut callback = ProgressCallback::new(observer);
//!
//! let outcome = engine.run(&mut callback);
//! assert_eq!(outcome.status, replay::Status::Terminated);
//! assert_eq!(outcome.stopped_at, Some(2.0));
//! ```
//!
//! [`Observer`]: stallguard_core::Observer

mod action;
mod callback;
mod event;
mod query;
mod stop;

pub mod replay;

pub use action::Action;
pub use callback::ProgressCallback;
pub use event::Event;
pub use query::{ProgressQuery, snapshot_of};
pub use stop::StopHandle;
