//! # Horizons vector-table records
//!
//! Utilities to parse one line of a **JPL Horizons vector table**
//! (`CSV_FORMAT=YES`, `VEC_TABLE=1`) into a [`VectorRecord`] usable by the
//! perihelion-search pipeline.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - A small error type [`ParseVectorError`] describing line-level parsing failures.
//! - A crate-internal line parser (`from_vector_line`) that converts a single
//!   comma-separated vector-table line into a [`VectorRecord`].
//! - The record type itself, carrying the epoch in **JD (TDB)**, the calendar
//!   label of the sample, and the heliocentric position components.
//!
//! ## Units & Conventions
//! -----------------
//! - **Input format:** `JD, A.D. YYYY-Mon-DD HH:MM:SS.ffff, X, Y, Z` with an
//!   optional trailing comma (Horizons closes each CSV row with one).
//! - **Time scale:** the first field is kept verbatim as a Julian Date (TDB).
//! - **Calendar label:** only the `YYYY-Mon-DD` token of the date field is
//!   retained; it names the companion refinement files and the plot ticks.
//! - **Positions:** X/Y/Z are kept in the units of the export (AU for the
//!   standard `OUT_UNITS=AU-D` query).
//!
//! ## Error Handling
//! -----------------
//! Parser failures are wrapped into [`PrecessError::EphemerisParsing`] with a
//! [`ParseVectorError`] payload for precise diagnostics (too few fields,
//! invalid epoch, invalid calendar label, invalid coordinate).
use chrono::NaiveDate;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::JD;
use crate::periprec_errors::PrecessError;

/// Format of the calendar token inside a Horizons date field.
const DATE_LABEL_FORMAT: &str = "%Y-%b-%d";

/// Line-level parsing errors for Horizons vector-table rows.
#[derive(Error, Debug, PartialEq)]
pub enum ParseVectorError {
    #[error("The line has too few fields")]
    TooFewFields,
    #[error("Invalid epoch: {0}")]
    InvalidTime(String),
    #[error("Invalid calendar label: {0}")]
    InvalidDateLabel(String),
    #[error("Invalid coordinate value: {0}")]
    InvalidCoordinate(String),
}

/// One sample of a Horizons vector table.
///
/// The serde field names match the columns of the CSV summary
/// (`NUMDATE,STRDATE,XCOORD,YCOORD,ZCOORD`), so a written summary re-parses
/// into the same records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    /// Epoch of the sample, Julian Date (TDB).
    #[serde(rename = "NUMDATE")]
    pub time: JD,
    /// Calendar label of the sample, `YYYY-Mon-DD`.
    #[serde(rename = "STRDATE")]
    pub date: String,
    #[serde(rename = "XCOORD")]
    pub x: f64,
    #[serde(rename = "YCOORD")]
    pub y: f64,
    #[serde(rename = "ZCOORD")]
    pub z: f64,
}

impl VectorRecord {
    /// Heliocentric position of the sample.
    pub fn pos_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of the position, the quantity minimized at perihelion.
    pub fn radial_distance(&self) -> f64 {
        self.pos_vector().norm()
    }

    /// Calendar date parsed from the label, if the label is well-formed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_LABEL_FORMAT).ok()
    }
}

/// Parse a single vector-table line into a [`VectorRecord`] (crate-private helper).
///
/// Arguments
/// ---------
/// * `line`: one comma-separated row between the `$$SOE` and `$$EOE` sentinels.
///
/// Return
/// ------
/// * A parsed [`VectorRecord`] or a [`PrecessError::EphemerisParsing`] naming
///   the field at fault.
pub(crate) fn from_vector_line(line: &str) -> Result<VectorRecord, PrecessError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    // Horizons CSV rows end with a comma, visible here as one empty field.
    let fields = match fields.as_slice() {
        [rest @ .., last] if last.is_empty() => rest,
        other => other,
    };

    if fields.len() < 5 {
        return Err(PrecessError::EphemerisParsing(
            ParseVectorError::TooFewFields,
        ));
    }

    let time = fields[0].parse::<JD>().map_err(|_| {
        PrecessError::EphemerisParsing(ParseVectorError::InvalidTime(fields[0].to_string()))
    })?;

    let date = date_label(fields[1]).ok_or_else(|| {
        PrecessError::EphemerisParsing(ParseVectorError::InvalidDateLabel(fields[1].to_string()))
    })?;

    let mut coords = [0.0; 3];
    for (slot, field) in coords.iter_mut().zip(&fields[2..5]) {
        *slot = field.parse::<f64>().map_err(|_| {
            PrecessError::EphemerisParsing(ParseVectorError::InvalidCoordinate(field.to_string()))
        })?;
    }

    Ok(VectorRecord {
        time,
        date,
        x: coords[0],
        y: coords[1],
        z: coords[2],
    })
}

/// Extract and validate the `YYYY-Mon-DD` token of a Horizons date field
/// (`A.D. YYYY-Mon-DD HH:MM:SS.ffff`).
fn date_label(field: &str) -> Option<String> {
    let label = field.split_whitespace().nth(1)?;
    NaiveDate::parse_from_str(label, DATE_LABEL_FORMAT).ok()?;
    Some(label.to_string())
}

#[cfg(test)]
mod vector_record_test {
    use super::*;

    #[test]
    fn test_from_vector_line_valid() {
        let line = "2459400.032916666, A.D. 2021-Jul-04 12:47:24.0000,  2.195672929244244E-01, -9.108330730147444E-01, -3.948423288985838E-01,";
        let record = from_vector_line(line).unwrap();

        assert_eq!(
            record,
            VectorRecord {
                time: 2459400.032916666,
                date: "2021-Jul-04".into(),
                x: 0.2195672929244244,
                y: -0.9108330730147444,
                z: -0.3948423288985838,
            }
        );
        assert_eq!(record.pos_vector().x, 0.2195672929244244);
    }

    #[test]
    fn test_from_vector_line_without_trailing_comma() {
        let line = "2451545.0, A.D. 2000-Jan-01 12:00:00.0000, 1.0, 0.0, 0.0";
        let record = from_vector_line(line).unwrap();
        assert_eq!(record.date, "2000-Jan-01");
        assert_eq!(record.radial_distance(), 1.0);
    }

    #[test]
    fn test_from_vector_line_too_short() {
        let result = from_vector_line("2451545.0, A.D. 2000-Jan-01 12:00:00.0000, 1.0");
        assert!(matches!(
            result,
            Err(PrecessError::EphemerisParsing(
                ParseVectorError::TooFewFields
            ))
        ));
    }

    #[test]
    fn test_from_vector_line_invalid_time() {
        let result = from_vector_line("24x15.0, A.D. 2000-Jan-01 12:00:00.0000, 1.0, 0.0, 0.0,");
        assert!(matches!(
            result,
            Err(PrecessError::EphemerisParsing(
                ParseVectorError::InvalidTime(_)
            ))
        ));
    }

    #[test]
    fn test_from_vector_line_invalid_date_label() {
        let result = from_vector_line("2451545.0, A.D. 2000-Foo-01 12:00:00.0000, 1.0, 0.0, 0.0,");
        assert!(matches!(
            result,
            Err(PrecessError::EphemerisParsing(
                ParseVectorError::InvalidDateLabel(_)
            ))
        ));
    }

    #[test]
    fn test_from_vector_line_invalid_coordinate() {
        let result = from_vector_line("2451545.0, A.D. 2000-Jan-01 12:00:00.0000, 1.0, zz, 0.0,");
        assert!(matches!(
            result,
            Err(PrecessError::EphemerisParsing(
                ParseVectorError::InvalidCoordinate(_)
            ))
        ));
    }

    #[test]
    fn test_calendar_date() {
        let record = VectorRecord {
            time: 2451545.0,
            date: "2000-Jan-01".into(),
            x: 1.0,
            y: 0.0,
            z: 0.0,
        };
        let date = record.calendar_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }
}
