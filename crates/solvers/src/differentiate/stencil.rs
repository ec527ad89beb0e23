use super::Error;

/// A supported finite-difference order of accuracy.
///
/// Odd orders use one-sided stencils that sample `x, x + h, x + 2h, ...`.
/// Even orders use centered stencils symmetric about `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
    Sixth = 6,
    Eighth = 8,
}

/// Sample offsets (in units of `h`) and weights (in units of `1/h`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    pub offsets: &'static [f64],
    pub weights: &'static [f64],
}

impl Order {
    /// All supported orders, lowest first.
    pub const ALL: [Order; 7] = [
        Order::First,
        Order::Second,
        Order::Third,
        Order::Fourth,
        Order::Fifth,
        Order::Sixth,
        Order::Eighth,
    ];

    /// Returns the order as an integer `p`.
    #[must_use]
    pub fn value(self) -> usize {
        self as usize
    }

    /// Returns true if the stencil is symmetric about `x`.
    #[must_use]
    pub fn is_centered(self) -> bool {
        self.value() % 2 == 0
    }

    /// Returns the stencil for this order.
    #[must_use]
    pub fn stencil(self) -> Stencil {
        match self {
            Order::First => Stencil {
                offsets: &[0.0, 1.0],
                weights: &[-1.0, 1.0],
            },
            Order::Second => Stencil {
                offsets: &[-1.0, 1.0],
                weights: &[-0.5, 0.5],
            },
            Order::Third => Stencil {
                offsets: &[0.0, 1.0, 2.0, 3.0],
                weights: &[-11.0 / 6.0, 3.0, -1.5, 1.0 / 3.0],
            },
            Order::Fourth => Stencil {
                offsets: &[-2.0, -1.0, 1.0, 2.0],
                weights: &[1.0 / 12.0, -2.0 / 3.0, 2.0 / 3.0, -1.0 / 12.0],
            },
            Order::Fifth => Stencil {
                offsets: &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
                weights: &[-137.0 / 60.0, 5.0, -5.0, 10.0 / 3.0, -1.25, 0.2],
            },
            Order::Sixth => Stencil {
                offsets: &[-3.0, -2.0, -1.0, 1.0, 2.0, 3.0],
                weights: &[
                    -1.0 / 60.0,
                    3.0 / 20.0,
                    -0.75,
                    0.75,
                    -3.0 / 20.0,
                    1.0 / 60.0,
                ],
            },
            Order::Eighth => Stencil {
                offsets: &[-4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0],
                weights: &[
                    1.0 / 280.0,
                    -4.0 / 105.0,
                    0.2,
                    -0.8,
                    0.8,
                    -0.2,
                    4.0 / 105.0,
                    -1.0 / 280.0,
                ],
            },
        }
    }
}

impl TryFrom<usize> for Order {
    type Error = Error;

    fn try_from(order: usize) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(Order::First),
            2 => Ok(Order::Second),
            3 => Ok(Order::Third),
            4 => Ok(Order::Fourth),
            5 => Ok(Order::Fifth),
            6 => Ok(Order::Sixth),
            8 => Ok(Order::Eighth),
            _ => Err(Error::UnsupportedOrder { order }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn round_trips_supported_orders() {
        for order in Order::ALL {
            assert_eq!(Order::try_from(order.value()), Ok(order));
        }
    }

    #[test]
    fn rejects_unsupported_orders() {
        for order in [0, 7, 9, 12] {
            assert_eq!(
                Order::try_from(order),
                Err(Error::UnsupportedOrder { order })
            );
        }
    }

    #[test]
    fn stencils_are_consistent() {
        for order in Order::ALL {
            let Stencil { offsets, weights } = order.stencil();
            assert_eq!(offsets.len(), weights.len());

            // Weights annihilate constants and reproduce the slope of x.
            let sum: f64 = weights.iter().sum();
            let slope: f64 = offsets.iter().zip(weights).map(|(o, w)| o * w).sum();
            assert_relative_eq!(sum, 0.0, epsilon = 1e-12);
            assert_relative_eq!(slope, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn even_orders_are_centered() {
        assert!(!Order::First.is_centered());
        assert!(Order::Second.is_centered());
        assert!(!Order::Fifth.is_centered());
        assert!(Order::Eighth.is_centered());
    }
}
