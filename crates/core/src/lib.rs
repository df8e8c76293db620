//! Core traits for the Gridstep framework.
//!
//! This crate defines the shared abstractions that fixed-grid solvers build on:
//!
//! - [`OdeState`]: a vector-like state that can be scaled and combined
//! - [`Derivative`]: the right-hand side `f(t, y)` of an ODE
//! - [`Observer`]: receives solver events for monitoring or diagnostics

mod derivative;
mod observer;
mod state;

pub use derivative::Derivative;
pub use observer::Observer;
pub use state::OdeState;
