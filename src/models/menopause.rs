//! Reproductive staging and menopause prediction results

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simplified STRAW+10 reproductive aging stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenopauseStage {
    /// Regular cycles, age-appropriate reserve
    Reproductive,
    /// Early menopausal transition
    EarlyTransition,
    /// Late menopausal transition
    LateTransition,
    /// First years after the final menstrual period
    EarlyPostmenopause,
    /// Late postmenopause
    LatePostmenopause,
}

impl MenopauseStage {
    /// Get the wire label for this stage
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reproductive => "reproductive",
            Self::EarlyTransition => "early_transition",
            Self::LateTransition => "late_transition",
            Self::EarlyPostmenopause => "early_postmenopause",
            Self::LatePostmenopause => "late_postmenopause",
        }
    }
}

impl fmt::Display for MenopauseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Family history of menopause timing
///
/// Unrecognized strings count as `Normal`, which carries no adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyHistory {
    /// Maternal menopause before 45
    Early,
    /// Maternal menopause between 45 and 55
    Normal,
    /// Maternal menopause after 55
    Late,
}

impl From<&str> for FamilyHistory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "early" => Self::Early,
            "late" => Self::Late,
            _ => Self::Normal,
        }
    }
}

/// Result of a menopause timing prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenopausePredictionResult {
    /// Predicted menopause age after factor adjustments
    pub predicted_age: f64,
    /// Prediction confidence interval, clamped to [40, 65]
    pub confidence_interval: (f64, f64),
    /// Current reproductive stage
    pub current_stage: MenopauseStage,
    /// Years until predicted menopause, floored at 0
    pub time_to_menopause_years: f64,
    /// Whether a usable fertility window remains
    pub fertility_window_remaining: bool,
    /// Factors that advanced the predicted age
    pub risk_factors: Vec<String>,
    /// Factors that delayed the predicted age
    pub protective_factors: Vec<String>,
    /// Stage-keyed guidance plus conditional additions
    pub recommendations: Vec<String>,
    /// Cohort and model provenance
    pub evidence_base: FxHashMap<&'static str, &'static str>,
}

/// Impact grading for a lifestyle adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorImpact {
    /// Minor contribution
    Low,
    /// Moderate contribution
    Moderate,
    /// Dominant contribution (genetics, current smoking)
    High,
}

/// One entry in the lifestyle estimator's adjustment ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorAdjustment {
    /// Human-readable factor name
    pub factor: String,
    /// Signed effect on the estimated age in years
    pub adjustment_years: f64,
    /// Impact grading
    pub impact: FactorImpact,
}

/// Result of the lifestyle-based menopause age estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleEstimate {
    /// Estimated menopause age, clamped to [40, 60]
    pub estimated_menopause_age: f64,
    /// Years until the estimate, floored at 0
    pub years_until_menopause: f64,
    /// Population baseline the adjustments start from
    pub baseline_age: f64,
    /// Every adjustment that entered the estimate, in application order
    pub adjustments: Vec<FactorAdjustment>,
    /// Perimenopause note when cycle changes are reported at age 40+
    pub cycle_changes_note: Option<String>,
}
