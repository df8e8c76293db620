//! Property tests for the fixed-grid solver.
//!
//! Run more cases with: `PROPTEST_CASES=1000 cargo test -p gridstep-solvers --test properties`

use gridstep_solvers::fixed_grid::{
    Error, Event, FixedGridSolver, GridError, Method, Options, TIME_TOLERANCE, fixed_step_grid,
    linear_interp,
};
use proptest::prelude::*;

/// Sorted query times within `[-5, 5]`.
fn query_times() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-5.0_f64..5.0, 1..16).prop_map(|mut t| {
        t.sort_by(f64::total_cmp);
        t
    })
}

fn method() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn trajectory_has_one_state_per_query_time(
        t in query_times(),
        h in 0.05_f64..2.0,
        method in method(),
        y0 in -10.0_f64..10.0,
        use_step in any::<bool>(),
    ) {
        let options = if use_step { Options::new().with_step_size(h) } else { Options::new() };
        let solver = FixedGridSolver::new(method, |t: f64, y: &f64| t.sin() - 0.5 * y, y0, options)
            .expect("valid config");

        let solution = solver.integrate(&t).expect("should integrate");

        prop_assert_eq!(solution.len(), t.len());
        prop_assert_eq!(solution.states[0], y0);
        prop_assert_eq!(solution.times, t);
    }

    #[test]
    fn fixed_step_grid_spans_query_times_exactly(
        start in -10.0_f64..10.0,
        span in 0.0_f64..10.0,
        h in 0.01_f64..1.0,
    ) {
        let end = start + span;
        let grid = fixed_step_grid(&[start, end], h).expect("grid fits");

        let expected_len = ((end - start) / h).ceil() as usize + 1;
        prop_assert_eq!(grid.len(), expected_len);
        prop_assert_eq!(grid[0], start);
        prop_assert_eq!(grid[grid.len() - 1], end);
        prop_assert!(grid.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn last_state_is_taken_at_the_final_grid_point(
        t in query_times(),
        h in 0.05_f64..2.0,
        method in method(),
    ) {
        let solver = FixedGridSolver::new(
            method,
            |_t: f64, y: &f64| -y,
            1.0,
            Options::new().with_step_size(h),
        )
        .expect("valid config");

        let mut last_step_state = None;
        let solution = solver
            .integrate_observed(&t, |event: &Event<'_, f64>| {
                if let Event::Stepped { state, .. } = event {
                    last_step_state = Some(**state);
                }
            })
            .expect("should integrate");

        // A final step shorter than the tolerance resolves to its start state.
        let last = *solution.last().expect("non-empty");
        let stepped = last_step_state.unwrap_or(1.0);
        prop_assert_eq!(solution.grid[solution.grid.len() - 1], t[t.len() - 1]);
        prop_assert!((last - stepped).abs() < 1e-5, "{} vs {}", last, stepped);
    }

    #[test]
    fn interpolation_returns_endpoints_exactly(
        t0 in -100.0_f64..100.0,
        dt in 1e-3_f64..10.0,
        y0 in prop::array::uniform3(-1e3_f64..1e3),
        y1 in prop::array::uniform3(-1e3_f64..1e3),
    ) {
        let t1 = t0 + dt;

        prop_assert_eq!(linear_interp(t0, t1, &y0, &y1, t0), y0);
        prop_assert_eq!(linear_interp(t0, t1, &y0, &y1, t1), y1);
    }

    #[test]
    fn interpolation_midpoint_is_the_average(
        t0 in -100.0_f64..100.0,
        dt in 1e-3_f64..10.0,
        y0 in -1e3_f64..1e3,
        y1 in -1e3_f64..1e3,
    ) {
        let t1 = t0 + dt;
        let mid = linear_interp(t0, t1, &y0, &y1, 0.5 * (t0 + t1));

        prop_assert!((mid - 0.5 * (y0 + y1)).abs() <= 1e-9 * (1.0 + y0.abs() + y1.abs()));
    }

    #[test]
    fn constant_derivative_is_exact(
        t in query_times(),
        h in 0.05_f64..2.0,
        method in method(),
        c in -3.0_f64..3.0,
        y0 in -10.0_f64..10.0,
    ) {
        let solver = FixedGridSolver::new(
            method,
            move |_t: f64, _y: &f64| c,
            y0,
            Options::new().with_step_size(h),
        )
        .expect("valid config");

        let solution = solver.integrate(&t).expect("should integrate");

        for (ti, yi) in solution.iter() {
            let exact = y0 + c * (ti - t[0]);
            prop_assert!((yi - exact).abs() < 1e-9, "t = {}: {} vs {}", ti, yi, exact);
        }
    }

    #[test]
    fn grids_off_by_more_than_tolerance_are_rejected(
        t in query_times(),
        offset in 10.0 * TIME_TOLERANCE..1.0,
        shift_start in any::<bool>(),
        method in method(),
    ) {
        let solver = FixedGridSolver::with_grid_constructor(
            method,
            |_t: f64, y: &f64| -y,
            1.0,
            Options::new(),
            move |_f, _y0: &f64, t: &[f64]| {
                let (start, end) = (t[0], t[t.len() - 1]);
                if shift_start {
                    vec![start - offset, end]
                } else {
                    vec![start, end + offset]
                }
            },
        )
        .expect("valid config");

        let result = solver.integrate(&t);

        prop_assert!(
            matches!(result, Err(Error::Grid(GridError::BoundaryMismatch { .. }))),
            "expected boundary mismatch, got {:?}",
            result.map(|solution| solution.grid)
        );
    }
}
