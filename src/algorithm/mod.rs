//! Clinical calculation algorithms
//!
//! Three calculators share one immutable reference-data store: ovarian
//! reserve assessment, IVF success prediction, and menopause timing
//! prediction (plus the lifestyle-based estimate). Every call is a pure
//! function of its inputs and the tables; no calculator depends on another
//! calculator's output.

pub mod adjustment;
pub mod ivf;
pub mod menopause;
pub mod reserve;

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, Result};
use crate::models::biomarker::{IvfInput, LifestyleInput, MenopauseInput, ReserveInput};
use crate::models::ivf::IvfSuccessResult;
use crate::models::menopause::{LifestyleEstimate, MenopausePredictionResult};
use crate::models::reserve::OvarianReserveResult;
use crate::reference::ReferenceData;

/// Age range accepted by strict validation, years
const VALID_AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=65;

/// Entry point bundling the reference data and configuration
///
/// Cheap to clone and safe to share across threads; the tables are
/// read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct ClinicalCalculators {
    reference: ReferenceData,
    config: CalculatorConfig,
}

impl ClinicalCalculators {
    /// Create calculators with embedded reference data and default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reference data store
    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceData) -> Self {
        self.reference = reference;
        self
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The reference data in use
    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Assess ovarian reserve from AMH with optional FSH/AFC corroboration
    pub fn assess_ovarian_reserve(&self, input: &ReserveInput) -> Result<OvarianReserveResult> {
        reserve::assess_ovarian_reserve(&self.reference, &self.config, input)
    }

    /// Predict the per-cycle IVF live-birth rate
    ///
    /// Fails with `UnknownCycleType` when the cycle type is neither
    /// "fresh" nor "frozen".
    pub fn predict_ivf_success(&self, input: &IvfInput) -> Result<IvfSuccessResult> {
        ivf::predict_ivf_success(&self.reference, &self.config, input)
    }

    /// Predict menopause timing from AMH, age, and named factors
    pub fn predict_menopause_timing(
        &self,
        input: &MenopauseInput,
    ) -> Result<MenopausePredictionResult> {
        menopause::predict_menopause_timing(&self.reference, &self.config, input)
    }

    /// Estimate menopause age from genetics and lifestyle factors
    pub fn estimate_menopause_age(&self, input: &LifestyleInput) -> Result<LifestyleEstimate> {
        menopause::lifestyle::estimate_menopause_age(&self.config, input)
    }
}

/// Strict biomarker validation, active only when enabled in config
pub(crate) fn validate_biomarkers(config: &CalculatorConfig, age: u32, amh: f64) -> Result<()> {
    validate_age(config, age)?;
    if config.validate_inputs && !(amh.is_finite() && amh >= 0.0) {
        return Err(CalculatorError::InvalidBiomarker(format!(
            "AMH must be a non-negative number, got {amh}"
        )));
    }
    Ok(())
}

/// Strict age validation, active only when enabled in config
pub(crate) fn validate_age(config: &CalculatorConfig, age: u32) -> Result<()> {
    if config.validate_inputs && !VALID_AGE_RANGE.contains(&age) {
        return Err(CalculatorError::InvalidBiomarker(format!(
            "age {age} outside {}..={}",
            VALID_AGE_RANGE.start(),
            VALID_AGE_RANGE.end()
        )));
    }
    Ok(())
}

/// Round to one decimal place, matching the precision of the reported
/// result fields
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
