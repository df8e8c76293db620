/// A state vector that fixed-grid solvers can advance.
///
/// Solvers only ever build new states as linear combinations of existing ones,
/// so two operations are enough: scaling by a factor and adding a scaled
/// state. Both return a new value and leave their operands untouched.
///
/// Implementations are provided for `f64`, `Vec<f64>`, `[f64; N]`, and, with
/// the `ndarray` feature, `ndarray::Array1<f64>`.
pub trait OdeState: Clone {
    /// Returns `self * factor`.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;

    /// Returns `self + other * factor`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `self` and `other` have different dimensions.
    #[must_use]
    fn add_scaled(&self, other: &Self, factor: f64) -> Self;
}

impl OdeState for f64 {
    fn scale(&self, factor: f64) -> Self {
        self * factor
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        self + other * factor
    }
}

impl OdeState for Vec<f64> {
    fn scale(&self, factor: f64) -> Self {
        self.iter().map(|v| v * factor).collect()
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "state dimension mismatch: {} vs {}",
            self.len(),
            other.len()
        );
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| a + b * factor)
            .collect()
    }
}

impl<const N: usize> OdeState for [f64; N] {
    fn scale(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        std::array::from_fn(|i| self[i] + other[i] * factor)
    }
}

#[cfg(feature = "ndarray")]
impl OdeState for ndarray::Array1<f64> {
    fn scale(&self, factor: f64) -> Self {
        self * factor
    }

    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "state dimension mismatch: {} vs {}",
            self.len(),
            other.len()
        );
        let mut next = self.clone();
        next.scaled_add(factor, other);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scalar_state() {
        let y = 2.0_f64;

        assert_relative_eq!(y.scale(1.5), 3.0);
        assert_relative_eq!(y.add_scaled(&4.0, -0.5), 0.0);
    }

    #[test]
    fn vector_state() {
        let y = vec![1.0, 2.0, 3.0];
        let dy = vec![0.1, 0.2, 0.3];

        assert_eq!(y.scale(2.0), vec![2.0, 4.0, 6.0]);
        assert_eq!(y.add_scaled(&dy, 10.0), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn array_state() {
        let y = [1.0, -1.0];

        assert_eq!(y.scale(-3.0), [-3.0, 3.0]);
        assert_eq!(y.add_scaled(&[2.0, 2.0], 0.5), [2.0, 0.0]);
    }

    #[test]
    fn operations_do_not_mutate_operands() {
        let y = vec![1.0, 1.0];
        let other = vec![5.0, 5.0];

        let _ = y.add_scaled(&other, 2.0);
        let _ = y.scale(0.0);

        assert_eq!(y, vec![1.0, 1.0]);
        assert_eq!(other, vec![5.0, 5.0]);
    }

    #[test]
    #[should_panic(expected = "state dimension mismatch")]
    fn vector_dimension_mismatch_panics() {
        let _ = vec![1.0, 2.0].add_scaled(&vec![1.0], 1.0);
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn ndarray_state() {
        let y = ndarray::array![1.0, 2.0];
        let dy = ndarray::array![2.0, -2.0];

        assert_eq!(y.add_scaled(&dy, 0.5), ndarray::array![2.0, 1.0]);
        assert_eq!(y.scale(2.0), ndarray::array![2.0, 4.0]);
    }
}
