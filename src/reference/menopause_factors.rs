//! Named menopause timing factors (SWAN study effect sizes)
//!
//! Effects are additive years applied to the base prediction, each at most
//! once, only when the corresponding condition is present. The confidence
//! weight is carried from the source cohort but does not enter the
//! arithmetic.

use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};

/// Effect size for one named factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorEffect {
    /// Signed effect on predicted menopause age, in years
    pub effect: f64,
    /// Cohort confidence weight in (0, 1]
    pub confidence: f64,
}

/// Menopause timing factor table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenopauseFactorTable {
    /// Current smoking
    pub smoking: FactorEffect,
    /// BMI over 30; positive effect, bucketed as protective
    pub bmi_over_30: FactorEffect,
    /// Menarche before age 11
    pub early_menarche: FactorEffect,
    /// No prior live births
    pub nulliparity: FactorEffect,
    /// Family history of menopause before 45
    pub family_history_early: FactorEffect,
    /// Chinese ethnicity
    pub chinese_ethnicity: FactorEffect,
    /// Japanese ethnicity
    pub japanese_ethnicity: FactorEffect,
}

impl Default for MenopauseFactorTable {
    fn default() -> Self {
        Self {
            smoking: FactorEffect { effect: -1.8, confidence: 0.85 },
            bmi_over_30: FactorEffect { effect: 0.6, confidence: 0.72 },
            early_menarche: FactorEffect { effect: -0.4, confidence: 0.68 },
            nulliparity: FactorEffect { effect: -0.8, confidence: 0.71 },
            family_history_early: FactorEffect { effect: -2.1, confidence: 0.79 },
            chinese_ethnicity: FactorEffect { effect: 0.9, confidence: 0.73 },
            japanese_ethnicity: FactorEffect { effect: 1.1, confidence: 0.76 },
        }
    }
}

impl MenopauseFactorTable {
    /// Check the table invariants: finite effects, confidence in (0, 1]
    pub fn validate(&self) -> Result<()> {
        let entries = [
            ("smoking", self.smoking),
            ("bmi_over_30", self.bmi_over_30),
            ("early_menarche", self.early_menarche),
            ("nulliparity", self.nulliparity),
            ("family_history_early", self.family_history_early),
            ("chinese_ethnicity", self.chinese_ethnicity),
            ("japanese_ethnicity", self.japanese_ethnicity),
        ];
        for (name, entry) in entries {
            if !entry.effect.is_finite() {
                return Err(CalculatorError::ReferenceData(format!(
                    "menopause factor {name} has a non-finite effect"
                )));
            }
            if !(entry.confidence > 0.0 && entry.confidence <= 1.0) {
                return Err(CalculatorError::ReferenceData(format!(
                    "menopause factor {name} confidence {} outside (0, 1]",
                    entry.confidence
                )));
            }
        }
        Ok(())
    }
}
