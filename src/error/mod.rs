//! Error handling for the clinical calculators.
//!
//! Nearly every numeric edge case in the calculators resolves by clamping,
//! so the error surface is narrow: a closed categorical input with no
//! default arm (cycle type), reference-data problems, and the opt-in
//! strict biomarker validation.

use std::io;

/// Specialized error type for the clinical calculators
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    /// Cycle type outside the closed {fresh, frozen} enumeration
    #[error("unknown cycle type '{0}', expected 'fresh' or 'frozen'")]
    UnknownCycleType(String),
    /// Biomarker rejected by strict validation (only when enabled in config)
    #[error("biomarker out of range: {0}")]
    InvalidBiomarker(String),
    /// Reference table failed its invariants or a lookup row is missing
    #[error("reference data error: {0}")]
    ReferenceData(String),
    /// Error reading a reference data file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error parsing reference data as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;
