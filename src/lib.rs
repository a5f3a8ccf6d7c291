pub mod constants;
pub mod csv_export;
pub mod ephemeris;
pub mod fit;
pub mod perihelion;
pub mod periprec_errors;
pub mod pipeline;
pub mod plot;
pub mod precession;

pub use constants::{ArcSec, Degree, JD, VectorSeries};
pub use ephemeris::vector_record::VectorRecord;
pub use perihelion::PerihelionParams;
pub use periprec_errors::PrecessError;
