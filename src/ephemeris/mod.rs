//! Ingestion of JPL Horizons vector exports.

pub mod horizons_reader;
pub mod vector_record;

pub use horizons_reader::load_vectors;
pub use vector_record::{ParseVectorError, VectorRecord};
