//! Fixed-grid ODE solvers.
//!
//! # Algorithm
//!
//! A fixed-grid solver integrates `y' = f(t, y)` along a deterministic grid of
//! times, without adaptive error control:
//!
//! 1. Validate the query times `t` and build the grid. The grid is `t` itself
//!    by default, an evenly spaced grid when a step size is set, or whatever a
//!    custom grid constructor returns. Its first and last times must match
//!    `t[0]` and `t[t.len() - 1]` within [`TIME_TOLERANCE`].
//! 2. Step the state across each consecutive grid pair `(t0, t1)` with the
//!    selected [`Method`].
//! 3. Resolve every query time covered by the step, either by
//!    [`linear_interp`] or, in [`Interpolation::Endpoint`] mode, by taking the
//!    state at `t1`.
//!
//! The returned [`Solution`] has exactly one state per query time, and its
//! first state is always the initial state.
//!
//! # Methods
//!
//! - [`Method::Euler`]: explicit Euler, order 1, one evaluation per step
//! - [`Method::Rk4`]: fourth-order Runge-Kutta (3/8 rule), four evaluations
//!   per step
//!
//! # Observer Events
//!
//! [`FixedGridSolver::integrate_observed`] emits one [`Event::Stepped`] per
//! grid step and one [`Event::Resolved`] per trajectory entry. Observers
//! cannot stop the integration.
//!
//! # Example
//!
//! ```
//! use gridstep_solvers::fixed_grid::{FixedGridSolver, Method, Options};
//!
//! let decay = |_t: f64, y: &f64| -y;
//! let solver =
//!     FixedGridSolver::new(Method::Euler, decay, 1.0, Options::new().with_step_size(0.5))?;
//!
//! let solution = solver.integrate(&[0.0, 1.0, 2.0])?;
//!
//! assert_eq!(solution.states, vec![1.0, 0.25, 0.0625]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod counted;
mod error;
mod event;
mod grid;
mod interpolate;
mod march;
mod method;
mod solution;


pub use config::{ConfigError, Interpolation, Options};
pub use error::Error;
pub use event::Event;
pub use grid::{GridError, TIME_TOLERANCE, fixed_step_grid, is_close};
pub use interpolate::linear_interp;
pub use method::{Increment, Method, euler_step, rk4_alt_step, rk4_step};
pub use solution::Solution;

use gridstep_core::{Derivative, Observer, OdeState};

use counted::Counted;
use march::March;

/// A custom grid constructor as a function pointer.
///
/// This is the default grid constructor type of [`FixedGridSolver`]. It is
/// never called unless the solver was built with
/// [`FixedGridSolver::with_grid_constructor`].
pub type GridFn<F, S> = fn(&F, &S, &[f64]) -> Vec<f64>;

/// How a solver builds its grid from the query times.
#[derive(Debug, Clone, Copy)]
enum Grid<G> {
    QueryTimes,
    StepSize(f64),
    Constructor(G),
}

/// A fixed-grid solver for `y' = f(t, y)` with initial state `y0`.
///
/// The configuration is fixed at construction. Each call to
/// [`integrate`](Self::integrate) builds a fresh grid and trajectory, so one
/// solver can be reused for any number of query sequences.
///
/// `G` is the type of the custom grid constructor, if any.
pub struct FixedGridSolver<F, S, G = GridFn<F, S>> {
    method: Method,
    derivative: F,
    y0: S,
    grid: Grid<G>,
    interpolation: Interpolation,
}

impl<F, S> FixedGridSolver<F, S> {
    /// Creates a solver that steps between query times or with a fixed step.
    ///
    /// If `options` has a step size, the grid is spaced by that step;
    /// otherwise the grid is the query times themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStepSize`] if the step size is not finite
    /// and positive.
    pub fn new(
        method: Method,
        derivative: F,
        y0: S,
        options: Options,
    ) -> Result<Self, ConfigError> {
        let grid = match options.validated_step_size()? {
            Some(step_size) => Grid::StepSize(step_size),
            None => Grid::QueryTimes,
        };

        log::debug!(
            "fixed-grid solver: method={method}, grid={}, interpolation={}",
            options
                .step_size()
                .map_or_else(|| "query times".to_owned(), |h| format!("step size {h}")),
            options.interpolation(),
        );

        Ok(Self {
            method,
            derivative,
            y0,
            grid,
            interpolation: options.interpolation(),
        })
    }
}

impl<F, S, G> FixedGridSolver<F, S, G> {
    /// Creates a solver whose grid is built by a custom constructor.
    ///
    /// The constructor receives `(derivative, y0, t)` and must return a
    /// non-decreasing grid whose first and last times match the first and last
    /// query times within [`TIME_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ExclusiveGrid`] if `options` also sets a step
    /// size.
    pub fn with_grid_constructor(
        method: Method,
        derivative: F,
        y0: S,
        options: Options,
        grid_constructor: G,
    ) -> Result<Self, ConfigError>
    where
        G: Fn(&F, &S, &[f64]) -> Vec<f64>,
    {
        if options.step_size().is_some() {
            return Err(ConfigError::ExclusiveGrid);
        }

        log::debug!(
            "fixed-grid solver: method={method}, grid=custom, interpolation={}",
            options.interpolation(),
        );

        Ok(Self {
            method,
            derivative,
            y0,
            grid: Grid::Constructor(grid_constructor),
            interpolation: options.interpolation(),
        })
    }

    /// Returns the integration method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the interpolation mode.
    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Returns the initial state.
    #[must_use]
    pub fn initial_state(&self) -> &S {
        &self.y0
    }

    /// Returns the derivative being integrated.
    #[must_use]
    pub fn derivative(&self) -> &F {
        &self.derivative
    }
}

impl<F, S, G> FixedGridSolver<F, S, G>
where
    S: OdeState,
    F: Derivative<S>,
    G: Fn(&F, &S, &[f64]) -> Vec<f64>,
{
    /// Builds the grid for the given query times.
    ///
    /// The grid is not validated here; [`integrate`](Self::integrate) checks
    /// it before stepping.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooManyGridPoints`] if a fixed-step grid over `t`
    /// cannot be allocated.
    pub fn construct_grid(&self, t: &[f64]) -> Result<Vec<f64>, GridError> {
        match &self.grid {
            Grid::QueryTimes => Ok(t.to_vec()),
            Grid::StepSize(step_size) => fixed_step_grid(t, *step_size),
            Grid::Constructor(construct) => Ok(construct(&self.derivative, &self.y0, t)),
        }
    }

    /// Integrates from `t[0]` and returns the solution at each query time.
    ///
    /// `t` must be non-empty and non-decreasing; repeated times are allowed.
    /// The state at `t[0]` is the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grid`] if the query times or the constructed grid are
    /// invalid, before the derivative is ever evaluated. Returns
    /// [`Error::Derivative`] with the derivative's own error if an evaluation
    /// fails; no partial trajectory is returned.
    pub fn integrate(&self, t: &[f64]) -> Result<Solution<S>, Error<F::Error>> {
        self.integrate_observed(t, ())
    }

    /// Integrates like [`integrate`](Self::integrate), reporting progress to
    /// an observer.
    ///
    /// See the [module docs](self) for event order.
    ///
    /// # Errors
    ///
    /// Same as [`integrate`](Self::integrate).
    pub fn integrate_observed<Obs>(
        &self,
        t: &[f64],
        mut observer: Obs,
    ) -> Result<Solution<S>, Error<F::Error>>
    where
        Obs: for<'a> Observer<Event<'a, S>>,
    {
        grid::validate_query_times(t)?;
        let grid = self.construct_grid(t)?;
        grid::validate_grid(&grid, t)?;

        log::debug!(
            "integrating {} query times over {} grid points with {} ({} evaluations per step)",
            t.len(),
            grid.len(),
            self.method,
            self.method.evaluations_per_step(),
        );

        let derivative = Counted::new(&self.derivative);
        let mut march = March::new(t, self.y0.clone(), &mut observer);
        let mut steps = 0;

        for (t0, t1) in grid.iter().copied().zip(grid.iter().skip(1).copied()) {
            let increment = self
                .method
                .step(&derivative, t0, t1 - t0, t1, march.current())
                .map_err(Error::Derivative)?;
            let next = march.current().add_scaled(&increment.delta, 1.0);

            steps += 1;
            log::trace!("step {steps}: t = {t0} -> {t1}");
            observer.observe(&Event::Stepped {
                step: steps,
                t0,
                t1,
                state: &next,
            });

            march.advance(t0, t1, next, self.interpolation, &mut observer);
        }

        let states = march.finish(&mut observer);

        log::debug!(
            "integration complete: {steps} steps, {} evaluations",
            derivative.evaluations(),
        );

        Ok(Solution {
            times: t.to_vec(),
            states,
            grid,
            steps,
            evaluations: derivative.evaluations(),
        })
    }
}
