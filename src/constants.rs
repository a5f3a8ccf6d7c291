//! # Constants and type definitions for Periprec
//!
//! This module centralizes the **conversion factors** and **common type
//! definitions** used throughout the `periprec` library.
//!
//! ## Overview
//!
//! - Angle and time-span conversions (degrees ↔ arcseconds, days ↔ centuries)
//! - Core type aliases used across the crate
//! - The container type for an ephemeris vector series
//!
//! These definitions are used by the loader, the perihelion search and the
//! precession fit.

use crate::ephemeris::vector_record::VectorRecord;

// -------------------------------------------------------------------------------------------------
// Unit conversions and wire-format markers
// -------------------------------------------------------------------------------------------------

/// Arcseconds in one degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Days in one Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Start sentinel of the data block in a Horizons vector export
pub const START_SENTINEL: &str = "$$SOE";

/// End sentinel of the data block in a Horizons vector export
pub const END_SENTINEL: &str = "$$EOE";

/// Number of parsed lines between two loader progress reports
pub const PROGRESS_STRIDE: usize = 10_000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Julian Date (days, TDB)
pub type JD = f64;

/// A chronological series of ephemeris vector records.
pub type VectorSeries = Vec<VectorRecord>;
