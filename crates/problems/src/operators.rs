use nalgebra::DMatrix;

fn spacing(a: f64, b: f64, m: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let intervals = (m + 1) as f64;
    (b - a).abs() / intervals
}

/// Second-difference matrix `(1/h²) tridiag(1, -2, 1)` on `m` interior points.
#[must_use]
pub fn laplacian_1d(a: f64, b: f64, m: usize) -> DMatrix<f64> {
    let h = spacing(a, b, m);
    let scale = 1.0 / (h * h);

    DMatrix::from_fn(m, m, |i, j| match i.abs_diff(j) {
        0 => -2.0 * scale,
        1 => scale,
        _ => 0.0,
    })
}

/// Centered first-difference matrix `(1/2h) tridiag(-1, 0, 1)` on `m` interior points.
#[must_use]
pub fn central_difference_1d(a: f64, b: f64, m: usize) -> DMatrix<f64> {
    let h = spacing(a, b, m);
    let scale = 0.5 / h;

    DMatrix::from_fn(m, m, |i, j| {
        if j == i + 1 {
            scale
        } else if i == j + 1 {
            -scale
        } else {
            0.0
        }
    })
}

/// Five-point Laplacian `I ⊗ K + K ⊗ I` on an `m × m` grid over `[a, b]²`.
///
/// Unknowns are ordered row by row, so the matrix is `m² × m²`.
#[must_use]
pub fn laplacian_2d(a: f64, b: f64, m: usize) -> DMatrix<f64> {
    let k = laplacian_1d(a, b, m);
    let identity = DMatrix::identity(m, m);
    identity.kronecker(&k) + k.kronecker(&identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::DVector;

    #[test]
    fn laplacian_1d_is_exact_for_quadratics() {
        // u = 1 - x² on [-1, 1] vanishes at the boundary and has u'' = -2.
        let m = 9;
        let h = 2.0 / 10.0;
        let u = DVector::from_fn(m, |i, _| {
            let x = -1.0 + h * (i + 1) as f64;
            1.0 - x * x
        });

        let uxx = laplacian_1d(-1.0, 1.0, m) * u;

        for value in uxx.iter() {
            assert_relative_eq!(*value, -2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn central_difference_is_antisymmetric() {
        let d = central_difference_1d(-1.0, 1.0, 4);
        assert_eq!(d.transpose(), -d.clone());
        assert_relative_eq!(d[(0, 1)], 0.5 / 0.4);
    }

    #[test]
    fn central_difference_is_exact_for_linear_interior() {
        let m = 7;
        let h = 2.0 / 8.0;
        let u = DVector::from_fn(m, |i, _| -1.0 + h * (i + 1) as f64);

        let ux = central_difference_1d(-1.0, 1.0, m) * u;

        for i in 1..m - 1 {
            assert_relative_eq!(ux[i], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn laplacian_2d_structure() {
        let m = 3;
        let h = 0.5;
        let k2 = laplacian_2d(-1.0, 1.0, m);

        assert_eq!(k2.shape(), (9, 9));
        assert_eq!(k2, k2.transpose());
        assert_relative_eq!(k2[(4, 4)], -4.0 / (h * h));
        assert_relative_eq!(k2[(4, 1)], 1.0 / (h * h));
        assert_relative_eq!(k2[(4, 3)], 1.0 / (h * h));
        // Row ends do not couple across grid lines.
        assert_relative_eq!(k2[(2, 3)], 0.0);
    }

    #[test]
    fn empty_grid() {
        assert_eq!(laplacian_1d(0.0, 1.0, 0).shape(), (0, 0));
    }
}
