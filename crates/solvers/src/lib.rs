//! Fixed-grid ODE solvers for the Gridstep framework.
//!
//! - [`fixed_grid`]: the fixed-grid engine: grid construction, Euler and RK4
//!   steps, interpolation, and the integration loop
//! - [`odeint()`] and [`odeint_with_grid()`]: method-name dispatch on top of
//!   the engine
//!
//! # Logging
//!
//! Solvers log through the [`log`] facade: solver construction and
//! integration summaries at `debug` level, individual steps at `trace` level.
//! No logger is installed by this crate.

pub mod fixed_grid;

mod odeint;

pub use odeint::{odeint, odeint_with_grid};
