use gridstep_core::{Derivative, OdeState};

use crate::fixed_grid::{Error, FixedGridSolver, Method, Options, Solution};

/// Solves `y' = f(t, y)` from `y0` at the query times `t`, selecting the
/// method by name.
///
/// `method` is looked up in the registry of fixed-grid methods (`"euler"`,
/// `"rk4"`). The solver is built from `options` and used for this one call.
/// The tolerances in `options` are accepted for uniformity with adaptive
/// solvers and ignored.
///
/// # Example
///
/// ```
/// use gridstep_solvers::{fixed_grid::Options, odeint};
///
/// let solution = odeint(|_t: f64, y: &f64| -y, 1.0, &[0.0, 1.0], "rk4", Options::new())?;
///
/// assert!((solution.states[1] - (-1.0_f64).exp()).abs() < 1e-2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Config`] if the method name is unknown or the options are
/// invalid, and otherwise any error from
/// [`FixedGridSolver::integrate`].
pub fn odeint<F, S>(
    derivative: F,
    y0: S,
    t: &[f64],
    method: &str,
    options: Options,
) -> Result<Solution<S>, Error<F::Error>>
where
    S: OdeState,
    F: Derivative<S>,
{
    let method: Method = method.parse()?;
    FixedGridSolver::new(method, derivative, y0, options)?.integrate(t)
}

/// Like [`odeint`], with a custom grid constructor.
///
/// # Errors
///
/// Returns [`Error::Config`] if the method name is unknown or `options` also
/// sets a step size, and otherwise any error from
/// [`FixedGridSolver::integrate`].
pub fn odeint_with_grid<F, S, G>(
    derivative: F,
    y0: S,
    t: &[f64],
    method: &str,
    options: Options,
    grid_constructor: G,
) -> Result<Solution<S>, Error<F::Error>>
where
    S: OdeState,
    F: Derivative<S>,
    G: Fn(&F, &S, &[f64]) -> Vec<f64>,
{
    let method: Method = method.parse()?;
    FixedGridSolver::with_grid_constructor(method, derivative, y0, options, grid_constructor)?
        .integrate(t)
}
