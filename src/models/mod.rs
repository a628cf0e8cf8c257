//! Data models for calculator inputs and results
//!
//! Inputs are plain value bundles supplied by the caller per call; results
//! are value objects owned entirely by the caller. The calculators keep no
//! mutable state between calls.

pub mod biomarker;
pub mod ivf;
pub mod menopause;
pub mod reserve;

pub use biomarker::{
    ActivityLevel, IvfInput, LifestyleInput, MenopauseInput, ReserveInput, SmokingStatus,
};
pub use ivf::{CycleType, IvfDiagnosis, IvfSuccessResult};
pub use menopause::{
    FactorAdjustment, FactorImpact, FamilyHistory, LifestyleEstimate, MenopausePredictionResult,
    MenopauseStage,
};
pub use reserve::{OvarianReserveCategory, OvarianReserveResult};
