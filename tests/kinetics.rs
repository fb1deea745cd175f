use approx::assert_relative_eq;

use chem_kinetics::{simulate, DomainError, ReactionScheme, SimulationParams};

const ALL_SCHEMES: [ReactionScheme; 5] = [
    ReactionScheme::ZeroOrder,
    ReactionScheme::FirstOrder,
    ReactionScheme::SecondOrder,
    ReactionScheme::Consecutive,
    ReactionScheme::Parallel,
];

fn params(scheme: ReactionScheme, k1: f64, k2: f64, ca0: f64, t_end: f64, dt: f64) -> SimulationParams {
    SimulationParams {
        scheme,
        k1,
        k2,
        ca0,
        t_end,
        dt,
    }
}

#[test]
fn sample_and_species_counts() {
    for &scheme in ALL_SCHEMES.iter() {
        let solution = simulate(&params(scheme, 0.5, 0.2, 1.0, 10.0, 0.5)).unwrap();
        // floor(10 / 0.5) = 20 samples
        assert_eq!(solution.len(), 20);
        assert_eq!(solution.time().len(), 20);
        assert_eq!(solution.scheme(), scheme);
        assert_eq!(solution.species(), scheme.species());
        for row in solution.concentrations() {
            assert_eq!(row.len(), solution.species());
        }
        assert_eq!(solution.labels().len(), solution.species());
    }
}

#[test]
fn time_points_span_zero_to_t_end_evenly() {
    let solution = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 10.0, 0.5)).unwrap();
    let time = solution.time();
    assert_relative_eq!(time[0], 0.0);
    assert_relative_eq!(*time.last().unwrap(), 10.0, epsilon = 1.0e-12);
    let spacing = time[1] - time[0];
    for pair in time.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], spacing, epsilon = 1.0e-12);
    }
}

#[test]
fn first_order_decay_matches_analytic_solution() {
    let solution = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 5.0, 0.01)).unwrap();
    let final_time = *solution.time().last().unwrap();
    let final_conc = solution.concentrations().last().unwrap()[0];
    assert_relative_eq!(final_time, 5.0, epsilon = 1.0e-12);
    assert_relative_eq!(final_conc, (-5.0f64).exp(), max_relative = 1.0e-4);

    // Every sample should track ca0 * exp(-k1 t) at its own time point.
    for (t, row) in solution.time().iter().zip(solution.concentrations().iter()) {
        assert_relative_eq!(row[0], (-t).exp(), max_relative = 1.0e-4, epsilon = 1.0e-9);
    }
}

#[test]
fn zero_order_decay_exhausts_and_holds() {
    // With k1 = 0.5 and ca0 = 1.0 the reactant runs out at t = 2.
    let dt = 0.01;
    let solution = simulate(&params(ReactionScheme::ZeroOrder, 0.5, 0.2, 1.0, 10.0, dt)).unwrap();

    let tail: Vec<f64> = solution
        .time()
        .iter()
        .zip(solution.concentrations().iter())
        .filter(|(t, _)| **t >= 3.0)
        .map(|(_, row)| row[0])
        .collect();
    assert!(!tail.is_empty());

    let settled = *tail.last().unwrap();
    for value in tail.iter() {
        // Settled at zero up to one step's worth of overshoot, and frozen.
        assert!(value.abs() <= dt * 1.5, "tail value {} too far from zero", value);
        assert!(*value <= 1.0e-12, "tail value {} is positive", value);
        assert_eq!(*value, settled, "tail is not constant");
    }

    // Before exhaustion the decay is linear in time.
    for (t, row) in solution
        .time()
        .iter()
        .zip(solution.concentrations().iter())
        .filter(|(t, _)| **t <= 1.5)
    {
        assert_relative_eq!(row[0], 1.0 - 0.5 * t, epsilon = 1.0e-8);
    }
}

#[test]
fn second_order_decay_matches_analytic_solution() {
    // 1/[A] = 1/ca0 + k1 t
    let solution = simulate(&params(ReactionScheme::SecondOrder, 0.5, 0.2, 2.0, 8.0, 0.01)).unwrap();
    for (t, row) in solution.time().iter().zip(solution.concentrations().iter()) {
        let analytic = 1.0 / (0.5 + 0.5 * t);
        assert_relative_eq!(row[0], analytic, max_relative = 1.0e-4);
    }
}

#[test]
fn consecutive_and_parallel_conserve_mass() {
    let ca0 = 1.0;
    for &scheme in [ReactionScheme::Consecutive, ReactionScheme::Parallel].iter() {
        let solution = simulate(&params(scheme, 0.5, 0.2, ca0, 10.0, 0.05)).unwrap();
        for row in solution.concentrations() {
            let total: f64 = row.iter().sum();
            assert_relative_eq!(total, ca0, epsilon = 1.0e-6);
        }
    }
}

#[test]
fn consecutive_intermediate_rises_then_falls() {
    let solution = simulate(&params(ReactionScheme::Consecutive, 1.0, 0.5, 1.0, 20.0, 0.01)).unwrap();
    let b: Vec<f64> = solution.concentrations().iter().map(|row| row[1]).collect();
    let peak = b.iter().cloned().fold(f64::MIN, f64::max);
    // Analytic peak of B for k1=1, k2=0.5 is at t = 2 ln 2 with
    // B = (k1/(k2-k1)) (e^{-k1 t} - e^{-k2 t}) = 0.5.
    assert_relative_eq!(peak, 0.5, max_relative = 1.0e-3);
    assert!(b[0] == 0.0);
    assert!(*b.last().unwrap() < 0.01);
}

#[test]
fn parallel_yield_ratio_follows_rate_constants() {
    let solution = simulate(&params(ReactionScheme::Parallel, 0.6, 0.2, 1.0, 30.0, 0.01)).unwrap();
    let last = solution.concentrations().last().unwrap();
    // At completion [B]/[C] = k1/k2.
    assert_relative_eq!(last[1] / last[2], 3.0, max_relative = 1.0e-6);
    assert!(last[0] < 1.0e-9);
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let p = params(ReactionScheme::Consecutive, 0.7, 0.3, 1.5, 12.0, 0.03);
    let first = simulate(&p).unwrap();
    let second = simulate(&p).unwrap();
    assert_eq!(first.time(), second.time());
    assert_eq!(first.concentrations(), second.concentrations());
}

#[test]
fn degenerate_step_counts_do_not_raise() {
    // floor(1 / 2) = 0 samples
    let empty = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 1.0, 2.0)).unwrap();
    assert!(empty.is_empty());

    // floor(1.5 / 1) = 1 sample: the initial state only
    let single = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 1.5, 1.0)).unwrap();
    assert_eq!(single.len(), 1);
    assert_relative_eq!(single.time()[0], 0.0);
    assert_relative_eq!(single.concentrations()[0][0], 1.0);
}

#[test]
fn invalid_parameters_are_rejected_before_any_work() {
    let zero_dt = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 10.0, 0.0));
    assert!(matches!(zero_dt, Err(DomainError::NonPositiveStep { .. })));

    let negative_duration = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, -1.0, 0.05));
    assert!(matches!(
        negative_duration,
        Err(DomainError::NonPositiveDuration { .. })
    ));

    let nan_rate = simulate(&params(ReactionScheme::FirstOrder, f64::NAN, 0.2, 1.0, 10.0, 0.05));
    assert!(matches!(
        nan_rate,
        Err(DomainError::NonFiniteParameter { name: "k1", .. })
    ));

    let infinite_ca0 = simulate(&params(
        ReactionScheme::Parallel,
        1.0,
        0.2,
        f64::INFINITY,
        10.0,
        0.05,
    ));
    assert!(matches!(
        infinite_ca0,
        Err(DomainError::NonFiniteParameter { name: "ca0", .. })
    ));

    let infinite_duration = simulate(&params(
        ReactionScheme::FirstOrder,
        1.0,
        0.2,
        1.0,
        f64::INFINITY,
        0.05,
    ));
    assert!(matches!(
        infinite_duration,
        Err(DomainError::NonFiniteParameter { name: "t_end", .. })
    ));

    let nan_dt = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 10.0, f64::NAN));
    assert!(matches!(
        nan_dt,
        Err(DomainError::NonFiniteParameter { name: "dt", .. })
    ));
}

#[test]
fn evaluation_counts_track_the_step_count() {
    let solution = simulate(&params(ReactionScheme::FirstOrder, 1.0, 0.2, 1.0, 10.0, 0.5)).unwrap();
    let stats = solution.stats();
    // 20 samples means 19 steps of 4 evaluations each.
    assert_eq!(stats.accepted_steps, 19);
    assert_eq!(stats.num_eval, 76);
}
