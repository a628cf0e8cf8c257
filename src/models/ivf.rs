//! IVF cycle types, diagnosis adjustments, and prediction result

use crate::error::CalculatorError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IVF treatment cycle type
///
/// This is a closed enumeration: parsing anything other than "fresh" or
/// "frozen" is a hard error, the only one the calculators raise by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    /// Fresh embryo transfer
    Fresh,
    /// Frozen embryo transfer
    Frozen,
}

impl CycleType {
    /// Get the wire label for this cycle type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Frozen => "frozen",
        }
    }
}

impl FromStr for CycleType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh" => Ok(Self::Fresh),
            "frozen" => Ok(Self::Frozen),
            _ => Err(CalculatorError::UnknownCycleType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Primary infertility diagnosis
///
/// Unrecognized diagnosis strings resolve to `Unknown`, which carries a
/// zero-effect adjustment. This silent default is intentional and must not
/// be upgraded to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IvfDiagnosis {
    /// Unexplained infertility
    Unexplained,
    /// Male factor infertility
    MaleFactor,
    /// Ovulatory dysfunction
    Ovulatory,
    /// Tubal factor
    Tubal,
    /// Endometriosis
    Endometriosis,
    /// Diminished ovarian reserve
    DiminishedOvarianReserve,
    /// Uterine factor
    Uterine,
    /// Unrecognized diagnosis, no adjustment
    Unknown,
}

impl IvfDiagnosis {
    /// Diagnosis-specific success rate adjustment in percent
    #[must_use]
    pub const fn rate_adjustment_pct(self) -> f64 {
        match self {
            Self::MaleFactor => 8.0,
            Self::Ovulatory => 5.0,
            Self::Tubal => -3.0,
            Self::Endometriosis => -8.0,
            Self::DiminishedOvarianReserve => -15.0,
            Self::Uterine => -10.0,
            Self::Unexplained | Self::Unknown => 0.0,
        }
    }
}

impl From<&str> for IvfDiagnosis {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "unexplained" => Self::Unexplained,
            "male_factor" => Self::MaleFactor,
            "ovulatory" => Self::Ovulatory,
            "tubal" => Self::Tubal,
            "endometriosis" => Self::Endometriosis,
            "diminished_ovarian_reserve" => Self::DiminishedOvarianReserve,
            "uterine" => Self::Uterine,
            _ => Self::Unknown,
        }
    }
}

/// Result of an IVF success prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IvfSuccessResult {
    /// Predicted per-cycle live birth rate in percent, clamped to [1, 75]
    pub live_birth_rate: f64,
    /// Rate confidence interval, clamped to [1, 75]
    pub confidence_interval: (f64, f64),
    /// Probability of at least one live birth across 3 independent cycles
    pub cumulative_success_3_cycles: f64,
    /// Base rate from the age bracket table, before adjustments
    pub age_adjusted_rate: f64,
    /// Rate after the AMH ratio adjustment, before clinical factors
    pub amh_adjusted_rate: f64,
    /// Named adjustments that entered the final rate
    pub clinical_factors: FxHashMap<&'static str, f64>,
    /// Tiered guidance keyed by final rate, age, and AMH
    pub recommendations: Vec<String>,
    /// Registry and model provenance
    pub evidence_base: FxHashMap<&'static str, &'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_type_parse() {
        assert_eq!("fresh".parse::<CycleType>().unwrap(), CycleType::Fresh);
        assert_eq!(" Frozen ".parse::<CycleType>().unwrap(), CycleType::Frozen);
        assert!("oral".parse::<CycleType>().is_err());
    }

    #[test]
    fn test_diagnosis_silent_default() {
        assert_eq!(IvfDiagnosis::from("male_factor"), IvfDiagnosis::MaleFactor);
        assert_eq!(IvfDiagnosis::from("something_else"), IvfDiagnosis::Unknown);
        assert_eq!(IvfDiagnosis::from("something_else").rate_adjustment_pct(), 0.0);
    }
}
