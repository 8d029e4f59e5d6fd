//! Core traits and types shared by the stallguard crates.
//!
//! - [`Observer`] — receives search events and optionally returns control actions
//! - [`ProgressSnapshot`] — the scalars read from a running search at one
//!   progress event

mod observer;
mod snapshot;

pub use observer::Observer;
pub use snapshot::ProgressSnapshot;
