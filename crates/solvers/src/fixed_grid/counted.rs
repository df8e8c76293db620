use std::cell::Cell;

use gridstep_core::Derivative;

/// A derivative wrapper that counts evaluations.
pub(super) struct Counted<'a, F> {
    inner: &'a F,
    evaluations: Cell<usize>,
}

impl<'a, F> Counted<'a, F> {
    pub(super) fn new(inner: &'a F) -> Self {
        Self {
            inner,
            evaluations: Cell::new(0),
        }
    }

    pub(super) fn evaluations(&self) -> usize {
        self.evaluations.get()
    }
}

impl<S, F: Derivative<S>> Derivative<S> for Counted<'_, F> {
    type Error = F::Error;

    fn evaluate(&self, t: f64, y: &S) -> Result<S, Self::Error> {
        self.evaluations.set(self.evaluations.get() + 1);
        self.inner.evaluate(t, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_evaluation() {
        let double = |_t: f64, y: &f64| 2.0 * y;
        let counted = Counted::new(&double);

        assert_eq!(counted.evaluate(0.0, &1.0), Ok(2.0));
        assert_eq!(counted.evaluate(1.0, &3.0), Ok(6.0));
        assert_eq!(counted.evaluations(), 2);
    }
}
