use std::convert::Infallible;

/// The right-hand side `f(t, y)` of an ordinary differential equation.
///
/// A derivative maps a time and a state to the rate of change of that state.
/// Derivatives must be deterministic, always returning the same result for a
/// given `(t, y)`, since solvers may evaluate them at arbitrary stage points.
///
/// Plain closures of the form `Fn(f64, &S) -> S` implement this trait with an
/// [`Infallible`] error. Derivatives that can fail should implement the trait
/// on their own type and choose an error type; solvers hand those errors back
/// to the caller unchanged.
pub trait Derivative<S> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative at time `t` and state `y`.
    ///
    /// # Errors
    ///
    /// Each derivative defines its own `Error` type to represent
    /// domain-specific failures.
    fn evaluate(&self, t: f64, y: &S) -> Result<S, Self::Error>;
}

impl<S, F> Derivative<S> for F
where
    F: Fn(f64, &S) -> S,
{
    type Error = Infallible;

    fn evaluate(&self, t: f64, y: &S) -> Result<S, Self::Error> {
        Ok(self(t, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("negative time: {0}")]
    struct NegativeTime(f64);

    /// Exponential growth that refuses to evaluate before `t = 0`.
    struct Growth {
        rate: f64,
    }

    impl Derivative<f64> for Growth {
        type Error = NegativeTime;

        fn evaluate(&self, t: f64, y: &f64) -> Result<f64, Self::Error> {
            if t < 0.0 {
                return Err(NegativeTime(t));
            }
            Ok(self.rate * y)
        }
    }

    #[test]
    fn closures_are_infallible_derivatives() {
        let decay = |_t: f64, y: &f64| -y;

        assert_eq!(decay.evaluate(0.0, &2.0), Ok(-2.0));
    }

    #[test]
    fn closures_over_vectors() {
        let rotate = |_t: f64, y: &Vec<f64>| vec![-y[1], y[0]];

        assert_eq!(rotate.evaluate(1.0, &vec![1.0, 0.0]), Ok(vec![0.0, 1.0]));
    }

    #[test]
    fn custom_derivatives_report_their_own_errors() {
        let growth = Growth { rate: 0.5 };

        assert_eq!(growth.evaluate(1.0, &4.0), Ok(2.0));
        assert_eq!(growth.evaluate(-1.0, &4.0), Err(NegativeTime(-1.0)));
    }
}
