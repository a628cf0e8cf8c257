//! A Rust library for evidence-based reproductive health calculations:
//! ovarian reserve assessment, IVF success prediction, and menopause
//! timing prediction over a shared, immutable reference-data store.
//!
//! The calculators are pure functions of their inputs and the tables; the
//! only hard failure is an unknown treatment cycle type. Everything else
//! (out-of-range ages, unrecognized diagnosis strings) resolves to a
//! defined best-effort result.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;

// Re-export the most common types for easier use
// Core types
pub use algorithm::ClinicalCalculators;
pub use config::CalculatorConfig;
pub use error::{CalculatorError, Result};
pub use reference::ReferenceData;

// Calculator inputs
pub use models::{ActivityLevel, IvfInput, LifestyleInput, MenopauseInput, ReserveInput, SmokingStatus};

// Calculator results
pub use models::{
    IvfSuccessResult, LifestyleEstimate, MenopausePredictionResult, OvarianReserveResult,
};

// Categorical vocabulary
pub use models::{CycleType, IvfDiagnosis, MenopauseStage, OvarianReserveCategory};
