use thiserror::Error;

/// Absolute tolerance used when comparing times.
///
/// Grid boundaries must match the query boundaries within this tolerance, and
/// query times this close to a step endpoint take the endpoint state exactly.
pub const TIME_TOLERANCE: f64 = 1e-6;

/// Returns `true` if two times are equal within [`TIME_TOLERANCE`].
#[must_use]
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < TIME_TOLERANCE
}

/// Errors that can occur when validating query times or a constructed grid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("no query times given")]
    EmptyQueryTimes,

    #[error("query time at index {index} is not finite")]
    NonFiniteQueryTime { index: usize },

    #[error("query times decrease at index {index}")]
    UnorderedQueryTimes { index: usize },

    #[error("grid constructor returned no times")]
    EmptyGrid,

    #[error("grid time at index {index} is not finite")]
    NonFiniteGrid { index: usize },

    #[error("grid times decrease at index {index}")]
    UnorderedGrid { index: usize },

    #[error("grid spans {grid:?} but query times span {query:?}")]
    BoundaryMismatch { grid: (f64, f64), query: (f64, f64) },

    #[error("fixed-step grid needs {points} points, more than can be allocated")]
    TooManyGridPoints { points: f64 },
}

/// Builds a grid from `t[0]` to `t[t.len() - 1]` with a fixed step size.
///
/// The grid has `ceil((end - start) / step_size) + 1` points spaced by
/// `step_size`. The last point is set to exactly the final query time, so the
/// final step is shorter whenever `step_size` does not divide the span evenly.
/// Interior points never exceed the final query time.
///
/// Returns an empty grid if `t` is empty.
///
/// # Errors
///
/// Returns [`GridError::TooManyGridPoints`] if the span is so large relative
/// to `step_size` that the grid cannot be allocated.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn fixed_step_grid(t: &[f64], step_size: f64) -> Result<Vec<f64>, GridError> {
    let (Some(&start), Some(&end)) = (t.first(), t.last()) else {
        return Ok(Vec::new());
    };

    let points = ((end - start) / step_size).ceil().max(0.0) + 1.0;
    if points >= usize::MAX as f64 {
        return Err(GridError::TooManyGridPoints { points });
    }
    let intervals = points as usize - 1;

    let mut grid = Vec::new();
    grid.try_reserve_exact(intervals + 1).map_err(|_| GridError::TooManyGridPoints { points })?;
    grid.extend((0..=intervals).map(|k| (start + k as f64 * step_size).min(end)));

    if let Some(last) = grid.last_mut() {
        *last = end;
    }
    Ok(grid)
}

/// Checks that query times are non-empty, finite, and non-decreasing.
pub(super) fn validate_query_times(t: &[f64]) -> Result<(), GridError> {
    if t.is_empty() {
        return Err(GridError::EmptyQueryTimes);
    }
    if let Some(index) = t.iter().position(|v| !v.is_finite()) {
        return Err(GridError::NonFiniteQueryTime { index });
    }
    if let Some(index) = first_decrease(t) {
        return Err(GridError::UnorderedQueryTimes { index });
    }
    Ok(())
}

/// Checks that a constructed grid is usable for the given query times.
///
/// The grid must be non-empty, finite, and non-decreasing, and its first and
/// last times must match the first and last query times within
/// [`TIME_TOLERANCE`].
pub(super) fn validate_grid(grid: &[f64], t: &[f64]) -> Result<(), GridError> {
    let (Some(&grid_start), Some(&grid_end)) = (grid.first(), grid.last()) else {
        return Err(GridError::EmptyGrid);
    };
    let (Some(&t_start), Some(&t_end)) = (t.first(), t.last()) else {
        return Err(GridError::EmptyQueryTimes);
    };

    if let Some(index) = grid.iter().position(|v| !v.is_finite()) {
        return Err(GridError::NonFiniteGrid { index });
    }
    if let Some(index) = first_decrease(grid) {
        return Err(GridError::UnorderedGrid { index });
    }
    if !(is_close(grid_start, t_start) && is_close(grid_end, t_end)) {
        return Err(GridError::BoundaryMismatch {
            grid: (grid_start, grid_end),
            query: (t_start, t_end),
        });
    }
    Ok(())
}

/// Returns the index of the first element smaller than its predecessor.
fn first_decrease(values: &[f64]) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}
