//! Reusable observers for stallguard.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across search engines.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-engine observers
//!   ([`HasProgress`], [`CanStopEarly`])
//! - [`stall`] — Early termination when the optimality gap stops improving
//!   ([`StallTermination`])
//!
//! [`Observer`]: stallguard_core::Observer
//! [`HasProgress`]: traits::HasProgress
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`StallTermination`]: stall::StallTermination

pub mod stall;
pub mod traits;
