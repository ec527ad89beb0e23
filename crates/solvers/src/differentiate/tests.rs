use super::*;

use approx::assert_relative_eq;

/// f(x) = x⁴ - 1/4 with f'(x) = 4x³.
fn quartic(x: f64) -> f64 {
    x.powi(4) - 0.25
}

fn quartic_root() -> f64 {
    0.25_f64.powf(0.25)
}

fn quartic_error(order: usize, h_factor: f64) -> f64 {
    let d = Differentiator::new(order, h_factor).unwrap();
    let x = quartic_root();
    (d.deriv(quartic, x) - 4.0 * x.powi(3)).abs()
}

#[test]
fn step_size_balances_truncation_and_roundoff() {
    for order in Order::ALL {
        let d = Differentiator::from_order(order, 1.0).unwrap();
        let p = order.value() as f64;
        assert_relative_eq!(
            d.h(),
            MACHINE_EPSILON.powf(1.0 / (p + 1.0)),
            max_relative = 1e-12
        );
    }

    let scaled = Differentiator::new(2, 10.0).unwrap();
    assert_relative_eq!(
        scaled.h(),
        10.0 * Differentiator::new(2, 1.0).unwrap().h(),
        max_relative = 1e-12
    );
}

#[test]
fn error_is_bounded_for_every_order() {
    for order in Order::ALL {
        let p = order.value();
        let h = Differentiator::from_order(order, 1.0).unwrap().h();
        let bound = 50.0 * (h.powi(i32::try_from(p).unwrap()) + MACHINE_EPSILON / h);
        let error = quartic_error(p, 1.0);
        assert!(error <= bound, "order {p}: error {error:e} exceeds {bound:e}");
    }
}

#[test]
fn higher_orders_are_more_accurate() {
    assert!(quartic_error(1, 1.0) < 1e-6);
    assert!(quartic_error(2, 1.0) < 1e-9);
    assert!(quartic_error(4, 1.0) < 1e-11);
    assert!(quartic_error(8, 1.0) < 1e-13);
}

#[test]
fn error_grows_away_from_unit_step_factor() {
    for order in [1, 2] {
        let best = quartic_error(order, 1.0);
        assert!(quartic_error(order, 1e-5) > 100.0 * best);
        assert!(quartic_error(order, 1e5) > 100.0 * best);
    }
}

#[test]
fn linear_functions_are_exact_for_centered_stencils() {
    let d = Differentiator::new(6, 1.0).unwrap();
    assert_relative_eq!(d.deriv(|x| 3.0 * x - 1.0, 0.5), 3.0, epsilon = 1e-10);
}

#[test]
fn rejects_unsupported_orders() {
    for order in [0, 7, 9, 10] {
        assert_eq!(
            Differentiator::new(order, 1.0),
            Err(Error::UnsupportedOrder { order })
        );
    }
}

#[test]
fn rejects_invalid_step_factors() {
    for h_factor in [0.0, -1.0, f64::INFINITY] {
        assert_eq!(
            Differentiator::new(1, h_factor),
            Err(Error::InvalidStepFactor { h_factor })
        );
    }
    assert!(matches!(
        Differentiator::new(1, f64::NAN),
        Err(Error::InvalidStepFactor { .. })
    ));
}

#[test]
fn default_is_first_order_unit_factor() {
    let d = Differentiator::default();
    assert_eq!(d.order(), Order::First);
    assert_relative_eq!(d.h_factor(), 1.0);
}

#[test]
fn try_deriv_propagates_errors() {
    let d = Differentiator::new(2, 1.0).unwrap();
    let result = d.try_deriv(|x| if x > 1.0 { Err("out of range") } else { Ok(x) }, 1.0);
    assert_eq!(result, Err("out of range"));
}

#[test]
fn second_derivative_of_cubic() {
    let d = Differentiator::new(4, 1.0).unwrap();
    assert_relative_eq!(d.deriv2(|x| x.powi(3), 2.0), 12.0, epsilon = 1e-6);
}

#[test]
fn error_constants_at_quartic_root() {
    let d = Differentiator::new(2, 1.0).unwrap();
    let x = quartic_root();
    let df = 4.0 * x.powi(3);
    let ddf = 12.0 * x.powi(2);

    let constants = d.error_constants(quartic, x);

    assert_relative_eq!(constants.quadratic, 0.5 * ddf / df, max_relative = 1e-4);
    assert_relative_eq!(
        constants.perturbation,
        d.h().powf(2.0 / 3.0) / df,
        max_relative = 1e-6
    );
}

#[test]
fn display_names_order_and_step() {
    let d = Differentiator::new(4, 1.0).unwrap();
    let text = d.to_string();
    assert!(text.starts_with("order 4 finite difference (h = "));
}
