//! Precession angle of the perihelion direction.
//!
//! The first perihelion of the series fixes the reference direction; every
//! passage is then measured as the angle between its position vector and that
//! reference, in arcseconds.

use nalgebra::Vector3;

use crate::constants::{ArcSec, ARCSEC_PER_DEGREE, JD};
use crate::ephemeris::vector_record::VectorRecord;

/// Parallel columns of the precession series: epoch, calendar label, angle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleSeries {
    pub times: Vec<JD>,
    pub labels: Vec<String>,
    pub arcsec: Vec<ArcSec>,
}

impl AngleSeries {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Compute the precession angle of each perihelion against the first one.
///
/// Argument
/// --------
/// * `series`: refined perihelion records, chronological
///
/// Return
/// ------
/// * the angle series; records whose normalized dot product drifts out of the
///   arccos domain are dropped silently
pub fn precession_angles(series: &[VectorRecord]) -> AngleSeries {
    let mut angles = AngleSeries::default();

    let Some(first) = series.first() else {
        return angles;
    };
    let reference: Vector3<f64> = first.pos_vector();

    for record in series {
        let pos = record.pos_vector();
        let ratio = pos.dot(&reference) / (pos.dot(&pos) * reference.dot(&reference)).sqrt();
        if ratio.abs() <= 1.0 {
            angles.times.push(record.time);
            angles.labels.push(record.date.clone());
            angles.arcsec.push(ARCSEC_PER_DEGREE * ratio.acos().to_degrees());
        }
    }

    angles
}
