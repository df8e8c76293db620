use gridstep_core::{Observer, OdeState};

use super::{Event, Interpolation};

/// Fold state threaded through the integration loop.
///
/// Tracks the running state at the current grid time, the cursor into the
/// query times, and the trajectory resolved so far. The entry for `t[0]` is
/// always the initial state, so the cursor starts at 1.
pub(super) struct March<'t, S> {
    times: &'t [f64],
    cursor: usize,
    current: S,
    states: Vec<S>,
}

impl<'t, S: OdeState> March<'t, S> {
    pub(super) fn new<Obs>(times: &'t [f64], initial: S, observer: &mut Obs) -> Self
    where
        Obs: for<'a> Observer<Event<'a, S>>,
    {
        if let Some(&t) = times.first() {
            observer.observe(&Event::Resolved {
                index: 0,
                t,
                state: &initial,
            });
        }

        let mut states = Vec::with_capacity(times.len());
        states.push(initial.clone());

        Self {
            times,
            cursor: 1,
            current: initial,
            states,
        }
    }

    /// Returns the state at the current grid time.
    pub(super) fn current(&self) -> &S {
        &self.current
    }

    /// Moves across the step `[t0, t1]` whose end state is `next`.
    ///
    /// Every pending query time up to and including `t1` is resolved against
    /// the step before `next` becomes the running state.
    pub(super) fn advance<Obs>(
        &mut self,
        t0: f64,
        t1: f64,
        next: S,
        interpolation: Interpolation,
        observer: &mut Obs,
    ) where
        Obs: for<'a> Observer<Event<'a, S>>,
    {
        while let Some(&t) = self.pending() {
            if t1 < t {
                break;
            }
            let state = interpolation.resolve(t0, t1, &self.current, &next, t);
            self.push(t, state, observer);
        }
        self.current = next;
    }

    /// Completes the trajectory and returns it.
    ///
    /// Query times left over once the grid is exhausted lie within tolerance of
    /// the final grid time, so they take the final state.
    pub(super) fn finish<Obs>(mut self, observer: &mut Obs) -> Vec<S>
    where
        Obs: for<'a> Observer<Event<'a, S>>,
    {
        while let Some(&t) = self.pending() {
            let state = self.current.clone();
            self.push(t, state, observer);
        }
        self.states
    }

    fn pending(&self) -> Option<&'t f64> {
        self.times.get(self.cursor)
    }

    fn push<Obs>(&mut self, t: f64, state: S, observer: &mut Obs)
    where
        Obs: for<'a> Observer<Event<'a, S>>,
    {
        observer.observe(&Event::Resolved {
            index: self.cursor,
            t,
            state: &state,
        });
        self.states.push(state);
        self.cursor += 1;
    }
}
