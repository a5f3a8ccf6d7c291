use thiserror::Error;

use crate::ephemeris::vector_record::ParseVectorError;

#[derive(Error, Debug)]
pub enum PrecessError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the ephemeris vector parsing: {0}")]
    EphemerisParsing(ParseVectorError),

    #[error("CSV read/write error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotRender(String),

    #[error("No local minimum found in refinement window: {0}")]
    EmptyRefinementWindow(String),

    #[error("Least-squares fit needs at least two distinct epochs, got {0} point(s)")]
    DegenerateFit(usize),

    #[error("Invalid perihelion search parameter: {0}")]
    InvalidSearchParameter(String),
}

impl PartialEq for PrecessError {
    fn eq(&self, other: &Self) -> bool {
        use PrecessError::*;
        match (self, other) {
            (EphemerisParsing(a), EphemerisParsing(b)) => a == b,
            (PlotRender(a), PlotRender(b)) => a == b,
            (EmptyRefinementWindow(a), EmptyRefinementWindow(b)) => a == b,
            (DegenerateFit(a), DegenerateFit(b)) => a == b,
            (InvalidSearchParameter(a), InvalidSearchParameter(b)) => a == b,

            // io and csv payloads are not comparable, equality is same-variant
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
