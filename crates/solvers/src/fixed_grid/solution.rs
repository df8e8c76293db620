/// The result of a fixed-grid integration.
///
/// `states[i]` is the solution at `times[i]`, so the trajectory always has
/// exactly one state per query time.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// The query times, as given.
    pub times: Vec<f64>,

    /// The trajectory: one state per query time.
    pub states: Vec<S>,

    /// The grid the solver stepped along.
    pub grid: Vec<f64>,

    /// Number of grid steps taken.
    pub steps: usize,

    /// Number of derivative evaluations.
    pub evaluations: usize,
}

impl<S> Solution<S> {
    /// Returns the number of trajectory entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the trajectory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state at the final query time.
    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.states.last()
    }

    /// Iterates over `(time, state)` pairs in query order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Consumes the solution, returning only the trajectory.
    #[must_use]
    pub fn into_states(self) -> Vec<S> {
        self.states
    }
}
