/// Receives events emitted by a solver while it runs.
///
/// Observers let callers monitor integration without changing the solver's
/// API, enabling logging, plotting, or collecting diagnostics. They are
/// read-only: a fixed-grid integration always runs to completion or fails.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_all<Obs: Observer<usize>>(events: &[usize], mut observer: Obs) {
        for event in events {
            observer.observe(event);
        }
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();

        emit_all(&[1, 2, 3], |event: &usize| seen.push(*event));

        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn unit_observer_ignores_events() {
        emit_all(&[1, 2, 3], ());
    }
}
