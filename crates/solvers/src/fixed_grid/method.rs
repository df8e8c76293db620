mod euler;
mod rk4;

use std::{fmt, str::FromStr};

use gridstep_core::{Derivative, OdeState};

use super::ConfigError;

pub use euler::euler_step;
pub use rk4::{rk4_alt_step, rk4_step};

/// The result of advancing one grid step.
#[derive(Debug, Clone, PartialEq)]
pub struct Increment<S> {
    /// The change in state over the step, so that `y1 = y0 + delta`.
    pub delta: S,

    /// The derivative evaluated at the start of the step, `f(t0, y0)`.
    pub f0: S,
}

/// A fixed-grid integration method.
///
/// The available methods form a closed registry, looked up by name with
/// [`str::parse`]:
///
/// | Name      | Method                         | Order |
/// |-----------|--------------------------------|-------|
/// | `"euler"` | [`Method::Euler`]              | 1     |
/// | `"rk4"`   | [`Method::Rk4`] (3/8 rule)     | 4     |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Explicit (forward) Euler.
    Euler,

    /// Classical fourth-order Runge-Kutta with 3/8-rule weights.
    Rk4,
}

impl Method {
    /// Every registered method.
    pub const ALL: [Method; 2] = [Method::Euler, Method::Rk4];

    /// Returns the registry name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Rk4 => "rk4",
        }
    }

    /// Returns the order of accuracy.
    ///
    /// A method of order `p` has a local truncation error of `O(h^(p+1))` per
    /// step, and a global error of `O(h^p)`.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::Euler => 1,
            Self::Rk4 => 4,
        }
    }

    /// Returns the number of derivative evaluations per step.
    #[must_use]
    pub fn evaluations_per_step(self) -> usize {
        match self {
            Self::Euler => 1,
            Self::Rk4 => 4,
        }
    }

    /// Advances the state `y0` from `t0` to `t1 = t0 + dt`.
    ///
    /// # Errors
    ///
    /// Returns the derivative's error unchanged if any evaluation fails.
    pub fn step<S, F>(
        self,
        derivative: &F,
        t0: f64,
        dt: f64,
        t1: f64,
        y0: &S,
    ) -> Result<Increment<S>, F::Error>
    where
        S: OdeState,
        F: Derivative<S>,
    {
        match self {
            Self::Euler => euler_step(derivative, t0, dt, t1, y0),
            Self::Rk4 => rk4_step(derivative, t0, dt, t1, y0),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| ConfigError::UnknownMethod(name.to_owned()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
