//! Ordinary least-squares line through the precession series.

use crate::constants::DAYS_PER_CENTURY;
use crate::periprec_errors::PrecessError;

/// Slope and intercept of a least-squares line, with the slope in the units
/// of y per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a line through `(x, y)` by ordinary least squares.
    ///
    /// Arguments
    /// ---------
    /// * `x`: abscissas, here epochs in JD
    /// * `y`: ordinates, here precession angles in arcseconds
    ///
    /// Return
    /// ------
    /// * the fitted line, or [`PrecessError::DegenerateFit`] for fewer than
    ///   two points or coincident abscissas
    pub fn least_squares(x: &[f64], y: &[f64]) -> Result<Self, PrecessError> {
        let n = x.len().min(y.len());
        if n < 2 {
            return Err(PrecessError::DegenerateFit(n));
        }

        let inv_n = 1.0 / n as f64;
        let mean_x = x[..n].iter().sum::<f64>() * inv_n;
        let mean_y = y[..n].iter().sum::<f64>() * inv_n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (xi, yi) in x[..n].iter().zip(&y[..n]) {
            let dx = xi - mean_x;
            sxx += dx * dx;
            sxy += dx * (yi - mean_y);
        }

        if sxx == 0.0 {
            return Err(PrecessError::DegenerateFit(n));
        }

        let slope = sxy / sxx;
        Ok(LinearFit {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Value of the fitted line at `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Slope rescaled from per-day to per-Julian-century.
    pub fn slope_arcsec_per_century(&self) -> f64 {
        self.slope * DAYS_PER_CENTURY
    }
}

#[cfg(test)]
mod fit_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = LinearFit::least_squares(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.value_at(10.0), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scattered_points() {
        // Least-squares line through a symmetric scatter around y = x.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.1, 0.9, 2.1, 2.9];
        let fit = LinearFit::least_squares(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, 0.96, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_century_scaling() {
        let fit = LinearFit {
            slope: 0.01,
            intercept: 0.0,
        };
        assert_relative_eq!(fit.slope_arcsec_per_century(), 365.25, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let result = LinearFit::least_squares(&[1.0], &[1.0]);
        assert!(matches!(result, Err(PrecessError::DegenerateFit(1))));
    }

    #[test]
    fn test_coincident_abscissas_are_degenerate() {
        let result = LinearFit::least_squares(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(PrecessError::DegenerateFit(3))));
    }
}
