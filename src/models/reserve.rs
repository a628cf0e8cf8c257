//! Ovarian reserve categories and assessment result

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal ovarian reserve categories, worst to best
/// (`VeryLow < Low < Normal < High < VeryHigh` in derived ordering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvarianReserveCategory {
    /// Significantly reduced egg quantity (AMH < 0.5 ng/mL)
    VeryLow,
    /// Below average egg quantity (AMH < 1.0 ng/mL)
    Low,
    /// Age-appropriate egg quantity (AMH < 4.0 ng/mL)
    Normal,
    /// Above average egg quantity (AMH < 8.0 ng/mL)
    High,
    /// OHSS risk with stimulation (AMH >= 8.0 ng/mL)
    VeryHigh,
}

impl OvarianReserveCategory {
    /// Get the wire label for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VeryLow => "Very low ovarian reserve",
            Self::Low => "Low ovarian reserve",
            Self::Normal => "Normal ovarian reserve",
            Self::High => "High ovarian reserve",
            Self::VeryHigh => "Very high ovarian reserve",
        }
    }
}

impl fmt::Display for OvarianReserveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of an ovarian reserve assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvarianReserveResult {
    /// Classified reserve category after biomarker overrides
    pub category: OvarianReserveCategory,
    /// Age-adjusted AMH percentile, 5-95
    pub percentile: u8,
    /// Percentile confidence interval, clamped to [1, 99]
    pub confidence_interval: (u8, u8),
    /// Category-keyed clinical interpretation
    pub clinical_interpretation: String,
    /// Ordered category-specific guidance
    pub recommendations: Vec<String>,
    /// Guideline and population-study provenance
    pub evidence_base: FxHashMap<&'static str, &'static str>,
}
