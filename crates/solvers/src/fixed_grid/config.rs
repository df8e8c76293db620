use std::fmt;

use thiserror::Error;

/// How the solver reports query times that fall strictly inside a grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Interpolation {
    /// Interpolate linearly between the states at both ends of the step.
    #[default]
    Linear,

    /// Use the state at the end of the step, wherever the query time falls.
    Endpoint,
}

impl Interpolation {
    /// Returns the name of the interpolation mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Endpoint => "endpoint",
        }
    }
}

/// Parses an interpolation mode by name.
///
/// Only `"linear"` selects [`Interpolation::Linear`]; any other name falls
/// back to [`Interpolation::Endpoint`].
impl From<&str> for Interpolation {
    fn from(name: &str) -> Self {
        if name == "linear" {
            Self::Linear
        } else {
            Self::Endpoint
        }
    }
}

impl From<String> for Interpolation {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Interpolation> for String {
    fn from(interpolation: Interpolation) -> Self {
        interpolation.name().to_owned()
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for a fixed-grid solver.
///
/// By default the solver steps exactly between consecutive query times and
/// interpolates linearly. A fixed step size can be set with
/// [`Options::with_step_size`]; it is validated when the solver is built.
///
/// `rtol` and `atol` are accepted so that fixed-grid and adaptive solvers can
/// share one options type, but fixed-grid solvers ignore them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    step_size: Option<f64>,
    interpolation: Interpolation,
    rtol: f64,
    atol: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            step_size: None,
            interpolation: Interpolation::Linear,
            rtol: 1e-7,
            atol: 1e-9,
        }
    }
}

impl Options {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed step size for grid construction.
    #[must_use]
    pub fn with_step_size(self, step_size: f64) -> Self {
        Self {
            step_size: Some(step_size),
            ..self
        }
    }

    /// Sets the interpolation mode.
    #[must_use]
    pub fn with_interpolation(self, interpolation: Interpolation) -> Self {
        Self {
            interpolation,
            ..self
        }
    }

    /// Sets the relative and absolute tolerances.
    #[must_use]
    pub fn with_tolerances(self, rtol: f64, atol: f64) -> Self {
        Self { rtol, atol, ..self }
    }

    /// Returns the fixed step size, if one was set.
    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        self.step_size
    }

    /// Returns the interpolation mode.
    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Returns the relative tolerance (unused by fixed-grid solvers).
    #[must_use]
    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    /// Returns the absolute tolerance (unused by fixed-grid solvers).
    #[must_use]
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Returns the validated step size, if one was set.
    pub(super) fn validated_step_size(&self) -> Result<Option<f64>, ConfigError> {
        match self.step_size {
            Some(h) if !h.is_finite() || h <= 0.0 => Err(ConfigError::InvalidStepSize(h)),
            step_size => Ok(step_size),
        }
    }
}

/// Errors that can occur when configuring a fixed-grid solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("step_size and grid_constructor are mutually exclusive")]
    ExclusiveGrid,

    #[error("step_size must be finite and positive, got {0}")]
    InvalidStepSize(f64),

    #[error("unknown method {0:?}, expected one of: euler, rk4")]
    UnknownMethod(String),
}
