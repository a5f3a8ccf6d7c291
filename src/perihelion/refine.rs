use camino::{Utf8Path, Utf8PathBuf};

use crate::constants::VectorSeries;
use crate::ephemeris::horizons_reader::load_vectors;
use crate::ephemeris::vector_record::VectorRecord;
use crate::perihelion::detection::locate_minima;
use crate::periprec_errors::PrecessError;

/// Pin down each coarse candidate with its fine-grained companion export.
///
/// For every candidate, the export `<base>_<label>.txt` is loaded, the local
/// minima of the window are located, and the first one is kept. Each window
/// is assumed to cover exactly one true perihelion passage.
///
/// Arguments
/// ---------
/// * `base`: filename base of the exports, without extension
/// * `coarse`: calendar-selected perihelion candidates
///
/// Return
/// ------
/// * one refined record per candidate, or
///   [`PrecessError::EmptyRefinementWindow`] when a window holds no minimum
pub fn refine_minima(
    base: &Utf8Path,
    coarse: &[VectorRecord],
) -> Result<VectorSeries, PrecessError> {
    let mut refined = Vec::with_capacity(coarse.len());

    for candidate in coarse {
        let window = load_vectors(&companion_path(base, &candidate.date))?;
        let first = locate_minima(&window)
            .into_iter()
            .next()
            .ok_or_else(|| PrecessError::EmptyRefinementWindow(candidate.date.clone()))?;
        refined.push(first);
    }

    Ok(refined)
}

/// Companion export covering the refinement window of one candidate.
pub(crate) fn companion_path(base: &Utf8Path, label: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{base}_{label}.txt"))
}
