/// Events emitted by the fixed-grid solver.
///
/// Integration emits [`Event::Resolved`] for the initial state, then, for
/// each grid step, one [`Event::Stepped`] followed by an
/// [`Event::Resolved`] for every query time that step covers.
#[derive(Debug, Clone)]
pub enum Event<'a, S> {
    /// The state was advanced across one grid step.
    Stepped {
        /// The step number, starting at 1.
        step: usize,

        /// Start time of the step.
        t0: f64,

        /// End time of the step.
        t1: f64,

        /// The state at `t1`.
        state: &'a S,
    },

    /// A query time was resolved to a trajectory entry.
    Resolved {
        /// Index of the query time.
        index: usize,

        /// The query time.
        t: f64,

        /// The state reported for `t`.
        state: &'a S,
    },
}

impl<S> Event<'_, S> {
    /// Returns the time the event's state belongs to.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Stepped { t1, .. } => *t1,
            Self::Resolved { t, .. } => *t,
        }
    }

    /// Returns the state carried by the event.
    #[must_use]
    pub fn state(&self) -> &S {
        match self {
            Self::Stepped { state, .. } | Self::Resolved { state, .. } => state,
        }
    }
}
