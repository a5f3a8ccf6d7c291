use itertools::Itertools;

use crate::constants::VectorSeries;
use crate::ephemeris::vector_record::VectorRecord;

/// Flag every strict local minimum of the radial distance as a perihelion
/// candidate.
///
/// Argument
/// --------
/// * `series`: a chronological vector series
///
/// Return
/// ------
/// * the records whose radial distance is strictly below both neighbors, in
///   series order
///
/// Note
/// ----
/// * Boundary records are never candidates and ties are never selected; the
///   series is assumed free of plateaus.
pub fn locate_minima(series: &[VectorRecord]) -> VectorSeries {
    let distances: Vec<f64> = series.iter().map(VectorRecord::radial_distance).collect();

    distances
        .iter()
        .tuple_windows()
        .enumerate()
        .filter(|(_, (before, at, after))| at < before && at < after)
        .map(|(i, _)| series[i + 1].clone())
        .collect()
}
