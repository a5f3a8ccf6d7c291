use chrono::Datelike;

use crate::constants::VectorSeries;
use crate::ephemeris::vector_record::VectorRecord;
use crate::perihelion::PerihelionParams;

/// Coarse calendar downsampling of perihelion candidates.
///
/// Argument
/// --------
/// * `series`: candidate perihelion records
/// * `params`: year step and admitted months
///
/// Return
/// ------
/// * the records whose label year is divisible by the step and whose label
///   month is admitted
///
/// Note
/// ----
/// * Records with an unparseable calendar label are dropped; the loader
///   guarantees the label of every record it produced.
pub fn select_by_calendar(series: &[VectorRecord], params: &PerihelionParams) -> VectorSeries {
    series
        .iter()
        .filter(|record| {
            record.calendar_date().is_some_and(|date| {
                date.year() % params.year_step == 0
                    && params
                        .months
                        .iter()
                        .any(|month| month.number_from_month() == date.month())
            })
        })
        .cloned()
        .collect()
}
