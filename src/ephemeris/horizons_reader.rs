//! # Horizons vector-table reader
//!
//! Reads a **JPL Horizons vector export** and extracts the data block bounded
//! by the `$$SOE` and `$$EOE` sentinels into a [`VectorSeries`].
//!
//! ## Overview
//! -----------------
//! The export is scanned line by line:
//! - Everything before the start sentinel is header material and is skipped.
//! - Each interior line is parsed into a
//!   [`VectorRecord`](super::vector_record::VectorRecord); a block with N
//!   interior lines yields exactly N records, in file order.
//! - The scan stops at the end sentinel; trailing material is ignored.
//!
//! ## Error semantics
//! -----------------
//! - A file without the start sentinel produces a **warning on stderr** and an
//!   empty series; the absence is not an error.
//! - A malformed interior line aborts the read with
//!   [`PrecessError::EphemerisParsing`] (fail-fast for corrupted exports).
//!
//! Progress is reported on stdout every [`PROGRESS_STRIDE`] parsed lines and
//! once at the end of the block.
use camino::Utf8Path;

use crate::constants::{VectorSeries, END_SENTINEL, PROGRESS_STRIDE, START_SENTINEL};
use crate::ephemeris::vector_record::from_vector_line;
use crate::periprec_errors::PrecessError;

/// Load the sentinel-delimited vector block of a Horizons export.
///
/// Arguments
/// ---------
/// * `path`: path to the export, including its extension.
///
/// Return
/// ------
/// * The records of the block in file order, or an empty series (with a
///   stderr warning) when the start sentinel is absent.
pub fn load_vectors(path: &Utf8Path) -> Result<VectorSeries, PrecessError> {
    let content = std::fs::read_to_string(path)?;

    let mut in_block = false;
    let mut records: VectorSeries = Vec::new();

    for line in content.lines() {
        if !in_block {
            if line.trim_end() == START_SENTINEL {
                in_block = true;
            }
        } else if line.trim_end() == END_SENTINEL {
            break;
        } else {
            records.push(from_vector_line(line)?);
            if records.len() % PROGRESS_STRIDE == 0 {
                println!("{path}: {} line(s)", records.len());
            }
        }
    }

    if !in_block {
        eprintln!("{path}: no {START_SENTINEL} line");
    } else {
        println!("{path}: {} line(s)", records.len());
    }

    Ok(records)
}
