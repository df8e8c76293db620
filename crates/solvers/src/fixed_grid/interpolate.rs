use gridstep_core::OdeState;

use super::{Interpolation, grid::is_close};

/// Estimates the state at time `t` by linear interpolation within a step.
///
/// `t` is expected to lie in `[t0, t1]`. Times within
/// [`TIME_TOLERANCE`](super::TIME_TOLERANCE) of either endpoint return that
/// endpoint's state unchanged, which keeps grid-aligned query times exact and
/// avoids dividing by a near-zero step.
#[must_use]
pub fn linear_interp<S: OdeState>(t0: f64, t1: f64, y0: &S, y1: &S, t: f64) -> S {
    if is_close(t, t0) {
        return y0.clone();
    }
    if is_close(t, t1) {
        return y1.clone();
    }

    let slope = (t - t0) / (t1 - t0);
    let difference = y1.add_scaled(y0, -1.0);
    y0.add_scaled(&difference, slope)
}

impl Interpolation {
    /// Resolves the state at query time `t` inside the step `[t0, t1]`.
    pub(super) fn resolve<S: OdeState>(self, t0: f64, t1: f64, y0: &S, y1: &S, t: f64) -> S {
        match self {
            Self::Linear => linear_interp(t0, t1, y0, y1, t),
            Self::Endpoint => y1.clone(),
        }
    }
}
