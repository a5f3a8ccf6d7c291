//! # Perihelion search
//!
//! Detection, calendar selection, and refinement of perihelion passages in a
//! heliocentric vector series.
//!
//! ## Overview
//! -----------------
//! The search runs in three stages:
//! - [`locate_minima`](detection::locate_minima): flag every strict local
//!   minimum of the radial distance as a candidate passage.
//! - [`select_by_calendar`](selection::select_by_calendar): coarse calendar
//!   downsampling of the candidates, driven by [`PerihelionParams`].
//! - [`refine_minima`](refine::refine_minima): reload a fine-grained
//!   companion export around each kept candidate and pin down the true
//!   minimum.

pub mod detection;
pub mod refine;
pub mod selection;

pub use detection::locate_minima;
pub use refine::refine_minima;
pub use selection::select_by_calendar;

use chrono::Month;

use crate::periprec_errors::PrecessError;

/// Calendar-selection parameters of the perihelion search.
///
/// A candidate passage survives selection when its label year is divisible by
/// `year_step` and its label month belongs to `months`.
///
/// Defaults
/// --------
/// * `year_step`: 50
/// * `months`: January, February, March
#[derive(Debug, Clone)]
pub struct PerihelionParams {
    /// Keep only years divisible by this step.
    pub year_step: i32,
    /// Calendar months admitted by the selection.
    pub months: Vec<Month>,
}

impl PerihelionParams {
    /// Construct a new [`PerihelionParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`PerihelionParamsBuilder`] to configure a custom search.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Month;
    /// use periprec::perihelion::PerihelionParams;
    ///
    /// let params = PerihelionParams::builder()
    ///     .year_step(10)
    ///     .months(vec![Month::January])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.year_step, 10);
    /// ```
    pub fn builder() -> PerihelionParamsBuilder {
        PerihelionParamsBuilder::new()
    }
}

impl Default for PerihelionParams {
    fn default() -> Self {
        PerihelionParams {
            year_step: 50,
            months: vec![Month::January, Month::February, Month::March],
        }
    }
}

/// Builder for [`PerihelionParams`], with validation.
#[derive(Debug, Clone)]
pub struct PerihelionParamsBuilder {
    params: PerihelionParams,
}

impl Default for PerihelionParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PerihelionParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: PerihelionParams::default(),
        }
    }

    pub fn year_step(mut self, v: i32) -> Self {
        self.params.year_step = v;
        self
    }

    pub fn months(mut self, v: Vec<Month>) -> Self {
        self.params.months = v;
        self
    }

    /// Validate and build the final [`PerihelionParams`].
    pub fn build(self) -> Result<PerihelionParams, PrecessError> {
        if self.params.year_step < 1 {
            return Err(PrecessError::InvalidSearchParameter(format!(
                "year_step must be >= 1, got {}",
                self.params.year_step
            )));
        }
        if self.params.months.is_empty() {
            return Err(PrecessError::InvalidSearchParameter(
                "months must not be empty".to_string(),
            ));
        }
        Ok(self.params)
    }
}

#[cfg(test)]
mod params_test {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = PerihelionParams::default();
        assert_eq!(params.year_step, 50);
        assert_eq!(
            params.months,
            vec![Month::January, Month::February, Month::March]
        );
    }

    #[test]
    fn test_builder_overrides() {
        let params = PerihelionParams::builder()
            .year_step(5)
            .months(vec![Month::June])
            .build()
            .unwrap();
        assert_eq!(params.year_step, 5);
        assert_eq!(params.months, vec![Month::June]);
    }

    #[test]
    fn test_builder_rejects_bad_year_step() {
        let result = PerihelionParams::builder().year_step(0).build();
        assert!(matches!(
            result,
            Err(PrecessError::InvalidSearchParameter(_))
        ));
    }

    #[test]
    fn test_builder_rejects_empty_months() {
        let result = PerihelionParams::builder().months(vec![]).build();
        assert!(matches!(
            result,
            Err(PrecessError::InvalidSearchParameter(_))
        ));
    }
}
