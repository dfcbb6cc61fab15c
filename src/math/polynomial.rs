use std::{borrow::Cow, fmt};

use itertools::Itertools;

use crate::{math::interval::check_argument, starsight_errors::StarsightError};

/// A polynomial with real coefficients, stored from the highest degree down to the constant term.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Cow<'static, [f64]>,
}

impl Polynomial {
    /// Polynomial over constant coefficients whose leading term is known to be non-zero.
    pub(crate) const fn from_static(coefficients: &'static [f64]) -> Self {
        Polynomial {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Build a polynomial from its coefficients, highest degree first.
    ///
    /// Arguments
    /// ---------
    /// * `coefficients`: `[c_n, c_(n-1), ..., c_0]`
    ///
    /// Return
    /// ------
    /// * the polynomial, or [`StarsightError::InvalidArgument`] if the list is empty
    ///   or the leading coefficient `c_n` is zero
    pub fn new(coefficients: &[f64]) -> Result<Self, StarsightError> {
        check_argument(
            coefficients.first().is_some_and(|&c| c != 0.0),
            "the leading coefficient of a polynomial must be non-zero",
        )?;
        Ok(Polynomial {
            coefficients: Cow::Owned(coefficients.to_vec()),
        })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `x` with Horner's scheme.
    pub fn at(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, &c)| {
                let power = degree - i;
                let sign = if c < 0.0 {
                    "-"
                } else if i > 0 {
                    "+"
                } else {
                    ""
                };
                let magnitude = if c.abs() == 1.0 && power > 0 {
                    String::new()
                } else {
                    c.abs().to_string()
                };
                let variable = match power {
                    0 => String::new(),
                    1 => "x".to_string(),
                    p => format!("x^{p}"),
                };
                format!("{sign}{magnitude}{variable}")
            })
            .join("");
        write!(f, "{terms}")
    }
}

#[cfg(test)]
mod polynomial_test {
    use super::*;

    #[test]
    fn test_leading_coefficient() {
        assert!(Polynomial::new(&[0.0, 1.0]).is_err());
        assert!(Polynomial::new(&[]).is_err());
        assert!(Polynomial::new(&[2.0, 0.0]).is_ok());
    }

    #[test]
    fn test_horner() {
        let p = Polynomial::new(&[1.0, 0.0, -3.0, 1.0]).unwrap();
        assert_eq!(p.degree(), 3);
        assert_eq!(p.at(0.0), 1.0);
        assert_eq!(p.at(2.0), 3.0);
        assert_eq!(p.at(-1.0), 3.0);

        let constant = Polynomial::new(&[4.5]).unwrap();
        assert_eq!(constant.degree(), 0);
        assert_eq!(constant.at(1234.0), 4.5);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(&[1.0, 0.0, -3.0, 1.0]).unwrap();
        assert_eq!(p.to_string(), "x^3-3x+1");

        let p = Polynomial::new(&[-1.0, 2.5]).unwrap();
        assert_eq!(p.to_string(), "-x+2.5");

        let p = Polynomial::new(&[0.5, -1.0, 0.0]).unwrap();
        assert_eq!(p.to_string(), "0.5x^2-x");

        let p = Polynomial::new(&[4.0]).unwrap();
        assert_eq!(p.to_string(), "4");
    }
}
