//! # Precession pipeline
//!
//! End-to-end run over one Horizons export family: load the coarse vector
//! table, locate the perihelion passages, downsample them by calendar, refine
//! each passage with its companion export, then emit the plot and the CSV
//! summary next to the inputs.
//!
//! ## Artifacts
//! -----------------
//! * `<base>.txt` (read): coarse vector export
//! * `<base>_<label>.txt` (read): one fine-grained export per kept passage
//! * `<base>.png` (written): precession scatter with the best-fit line
//! * `<base>.csv` (written): refined perihelion records
use camino::{Utf8Path, Utf8PathBuf};

use crate::constants::VectorSeries;
use crate::csv_export::save_records;
use crate::ephemeris::horizons_reader::load_vectors;
use crate::fit::LinearFit;
use crate::perihelion::{locate_minima, refine_minima, select_by_calendar, PerihelionParams};
use crate::periprec_errors::PrecessError;
use crate::plot::save_plot;
use crate::precession::precession_angles;

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Refined perihelion records, as written to the CSV summary.
    pub perihelia: VectorSeries,
    /// Least-squares line through the precession series.
    pub fit: LinearFit,
}

/// Run the full pipeline for one export family.
///
/// Arguments
/// ---------
/// * `base`: filename base of the export family, without extension
/// * `params`: calendar-selection parameters
///
/// Return
/// ------
/// * the refined records and the precession fit; the plot and the CSV are
///   written as side effects
pub fn run(base: &Utf8Path, params: &PerihelionParams) -> Result<PipelineSummary, PrecessError> {
    let records = load_vectors(&with_extension(base, "txt"))?;

    let minima = locate_minima(&records);
    println!(
        "{base}: {} candidate perihelia in {} record(s)",
        minima.len(),
        records.len()
    );

    let coarse = select_by_calendar(&minima, params);
    println!("{base}: {} passage(s) kept by calendar selection", coarse.len());

    let refined = refine_minima(base, &coarse)?;
    let angles = precession_angles(&refined);
    let fit = LinearFit::least_squares(&angles.times, &angles.arcsec)?;

    save_plot(&angles, &fit, &with_extension(base, "png"))?;
    save_records(&refined, &with_extension(base, "csv"))?;

    Ok(PipelineSummary {
        perihelia: refined,
        fit,
    })
}

fn with_extension(base: &Utf8Path, extension: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{base}.{extension}"))
}
