use std::time::Duration;

use approx::assert_relative_eq;
use nalgebra::DVector;
use tangent_core::EquationProblem;
use tangent_observers::{Deadline, LogObserver};
use tangent_problems::{ArcTan, Quartic, bratu_1d, bratu_2d, burgers, laplacian_1d};
use tangent_solvers::{
    differentiate::Differentiator,
    equation::newton::{Analytic, Config, Gaussian, LineSearch, Newton, Status},
    linear::{DenseLu, Divide},
};

#[test]
fn bratu_converges_from_negative_guess() {
    let problem = bratu_1d(5, 0.5);
    let config = Config::new(20, 1e-14, 1e-12).unwrap();

    let solution = Newton::new(Analytic, DenseLu)
        .solve(
            &problem,
            DVector::from_element(5, -1.0),
            &config,
            (LogObserver::default(), Deadline::after(Duration::from_secs(60))),
        )
        .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters <= 20);

    // Check the residual independently of the solver.
    let k = laplacian_1d(-1.0, 1.0, 5);
    let r = &k * &solution.x - solution.x.map(|u| 0.5 * (-u).exp());
    assert!(r.norm() < 1e-10, "residual {}", r.norm());
}

#[test]
fn bratu_converges_quadratically() {
    let problem = bratu_1d(5, 0.5);
    let config = Config::new(20, 1e-14, 1e-12).unwrap();

    let solution = Newton::new(Analytic, DenseLu)
        .solve_unobserved(&problem, DVector::from_element(5, -1.0), &config)
        .unwrap();

    let norms: Vec<f64> = solution.history.iter().map(|r| r.residual_norm).collect();
    assert!(norms.windows(2).all(|w| w[1] < w[0]), "{norms:?}");
    assert!(solution.iters <= 6);
}

#[test]
fn bratu_with_finite_difference_jacobian() {
    let problem = bratu_1d(5, 0.5);
    let config = Config::new(20, 1e-12, 1e-12).unwrap();
    let x0 = DVector::from_element(5, -1.0);

    let exact = Newton::new(Analytic, DenseLu)
        .solve_unobserved(&problem, x0.clone(), &config)
        .unwrap();
    let approx = Newton::new(Differentiator::new(4, 1.0).unwrap(), DenseLu)
        .solve_unobserved(&problem, x0, &config)
        .unwrap();

    assert!(approx.converged());
    for (a, b) in approx.x.iter().zip(exact.x.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }
}

#[test]
fn bratu_step_criterion() {
    let problem = bratu_1d(5, 0.5);
    let config = Config::new(20, 0.0, 0.0)
        .unwrap()
        .with_step_tol(5e-12)
        .unwrap();

    let solution = Newton::new(Analytic, DenseLu)
        .solve_unobserved(&problem, DVector::from_element(5, -1.0), &config)
        .unwrap();

    assert!(solution.converged());
    assert!(solution.history.last().unwrap().step_norm < 5e-12);
}

#[test]
fn bratu_2d_converges() {
    let problem = bratu_2d(4, 0.5);
    let config = Config::new(20, 1e-12, 1e-12).unwrap();

    let solution = Newton::new(Analytic, DenseLu)
        .solve_unobserved(&problem, DVector::from_element(16, 1.0), &config)
        .unwrap();

    assert!(solution.converged());
    let r = problem.residual(&solution.x).unwrap();
    assert!(r.norm() <= 1e-12 * solution.initial_residual_norm + 1e-12);

    // The solution is symmetric under reflection of the grid.
    let x = &solution.x;
    assert_relative_eq!(x[0], x[15], epsilon = 1e-10);
    assert_relative_eq!(x[1], x[4], epsilon = 1e-10);
}

#[test]
fn burgers_converges_with_backtracking() {
    let m = 50;
    let problem = burgers(m, 20.0, DVector::from_element(m, 1.0)).unwrap();
    let config = Config::new(40, 1e-12, 0.0).unwrap();
    let line_search = LineSearch::new(20, 3.0, 0.9999).unwrap();

    let solution = Newton::new(Analytic, DenseLu)
        .solve_backtracking(&problem, DVector::zeros(m), &config, &line_search, ())
        .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.history.iter().all(|r| r.alpha <= 1.0));
}

#[test]
fn burgers_converges_with_full_steps() {
    let m = 10;
    let problem = burgers(m, 100.0, DVector::from_element(m, 1.0)).unwrap();
    let config = Config::new(20, 1e-12, 0.0).unwrap();

    let solution = Newton::new(Analytic, DenseLu)
        .solve_unobserved(&problem, DVector::zeros(m), &config)
        .unwrap();

    assert!(solution.converged());
}

#[test]
fn inexact_poisson_converges_under_noise() {
    let m = 50;
    let problem = bratu_1d(m, 0.5);
    let config = Config::new(20, 1e-10, 1e-10).unwrap();
    let newton = Newton::new(Analytic, DenseLu);

    let mut iters = Vec::new();
    for sigma in [1e-14, 1e-1] {
        let mut source = Gaussian::new(sigma, 2024).unwrap();
        let solution = newton
            .solve_inexact(
                &problem,
                DVector::from_element(m, 1.0),
                &config,
                None,
                &mut source,
                (),
            )
            .unwrap();

        assert!(solution.converged(), "sigma {sigma:e}");
        let realized = solution.history[0].perturbation;
        assert!(
            realized > sigma / 1000.0 && realized < 10.0 * sigma,
            "sigma {sigma:e}, realized {realized:e}"
        );
        iters.push(solution.iters);
    }

    assert!(iters[0] <= iters[1], "{iters:?}");
}

#[test]
fn scalar_model_problems() {
    let config = Config::default();
    let line_search = LineSearch::default();
    let newton = Newton::new(Analytic, Divide);

    let solution = newton
        .solve_backtracking(&ArcTan, 10.0, &config, &line_search, ())
        .unwrap();
    assert!(solution.converged());
    assert!(solution.x.abs() < 1e-12);

    let solution = Newton::new(Differentiator::new(8, 1.0).unwrap(), Divide)
        .solve_unobserved(&Quartic { c: 16.0 }, 3.0, &config)
        .unwrap();
    assert!(solution.converged());
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-13);
}
