use gridstep_core::{Derivative, OdeState};

use super::Increment;

/// Advances one step with explicit Euler.
///
/// ```text
/// f0      = f(t0, y0)
/// delta_y = dt * f0
/// ```
///
/// Uses one derivative evaluation.
///
/// # Errors
///
/// Returns the derivative's error unchanged if the evaluation fails.
pub fn euler_step<S, F>(
    derivative: &F,
    t0: f64,
    dt: f64,
    _t1: f64,
    y0: &S,
) -> Result<Increment<S>, F::Error>
where
    S: OdeState,
    F: Derivative<S>,
{
    let f0 = derivative.evaluate(t0, y0)?;
    Ok(Increment {
        delta: f0.scale(dt),
        f0,
    })
}
