//! Menopause timing prediction
//!
//! A log-linear model of current AMH and age gives the base predicted
//! menopause age; named SWAN-study factors then adjust it additively.
//! Staging follows a simplified STRAW+10 scheme driven primarily by AMH
//! bands once the age thresholds fail.

pub mod lifestyle;

use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::models::biomarker::MenopauseInput;
use crate::models::menopause::{FamilyHistory, MenopausePredictionResult, MenopauseStage};
use crate::reference::ReferenceData;
use rustc_hash::FxHashMap;

/// Half-width of the prediction confidence interval, years
const PREDICTION_UNCERTAINTY_YEARS: f64 = 2.5;

/// Predict menopause timing from AMH, age, and risk/protective factors
pub fn predict_menopause_timing(
    reference: &ReferenceData,
    config: &CalculatorConfig,
    input: &MenopauseInput,
) -> Result<MenopausePredictionResult> {
    super::validate_biomarkers(config, input.age, input.amh)?;

    let factors = &reference.menopause_factors;
    let base_prediction = base_menopause_prediction(input.age, input.amh);

    let mut adjusted_age = base_prediction;
    let mut risk_factors: Vec<String> = Vec::new();
    let mut protective_factors: Vec<String> = Vec::new();

    let mut apply = |effect: f64, label: &str| {
        adjusted_age += effect;
        if config.log_adjustments {
            log::debug!("menopause factor {label}: {effect:+.1}y -> {adjusted_age:.1}");
        }
    };

    if input.smoking {
        apply(factors.smoking.effect, "smoking");
        risk_factors.push("Current smoking".to_string());
    }

    if let Some(bmi) = input.bmi {
        if bmi > 30.0 {
            // Positive effect: adipose estrogen reserve delays menopause,
            // so high BMI lands in the protective bucket
            apply(factors.bmi_over_30.effect, "bmi_over_30");
            protective_factors.push("Higher BMI".to_string());
        }
    }

    if let Some(history) = input.family_history.as_deref() {
        if FamilyHistory::from(history) == FamilyHistory::Early {
            apply(factors.family_history_early.effect, "family_history_early");
            risk_factors.push("Family history of early menopause".to_string());
        }
    }

    if input.parity == 0 {
        apply(factors.nulliparity.effect, "nulliparity");
        risk_factors.push("Nulliparity".to_string());
    }

    if let Some(ethnicity) = input.ethnicity.as_deref() {
        let ethnicity = ethnicity.to_lowercase();
        // Substring match, first arm wins
        if ethnicity.contains("chinese") {
            apply(factors.chinese_ethnicity.effect, "chinese_ethnicity");
            protective_factors.push("Chinese ethnicity".to_string());
        } else if ethnicity.contains("japanese") {
            apply(factors.japanese_ethnicity.effect, "japanese_ethnicity");
            protective_factors.push("Japanese ethnicity".to_string());
        }
    }

    let ci_lower = (adjusted_age - PREDICTION_UNCERTAINTY_YEARS).max(40.0);
    let ci_upper = (adjusted_age + PREDICTION_UNCERTAINTY_YEARS).min(65.0);

    let current_stage = reproductive_stage(input.age, input.amh);
    let time_remaining = (adjusted_age - f64::from(input.age)).max(0.0);
    let fertility_window = time_remaining > 2.0 && input.amh > 0.5;

    Ok(MenopausePredictionResult {
        predicted_age: super::round1(adjusted_age),
        confidence_interval: (super::round1(ci_lower), super::round1(ci_upper)),
        current_stage,
        time_to_menopause_years: super::round1(time_remaining),
        fertility_window_remaining: fertility_window,
        recommendations: recommendations_for(current_stage, time_remaining, input.smoking),
        risk_factors,
        protective_factors,
        evidence_base: evidence_base(),
    })
}

/// Base predicted menopause age from the log-linear AMH/age model
///
/// `ln(years remaining) = 3.8 + 0.4 ln(AMH) - 0.02 age`, with the years
/// clamped to [0.5, 15]. Unmeasurable AMH short-circuits to half a year.
#[must_use]
pub fn base_menopause_prediction(age: u32, amh: f64) -> f64 {
    let age_years = f64::from(age);
    if amh <= 0.01 {
        return age_years + 0.5;
    }

    let log_years_remaining = 3.8 + 0.4 * amh.ln() - 0.02 * age_years;
    age_years + log_years_remaining.exp().clamp(0.5, 15.0)
}

/// Simplified STRAW+10 staging, ordered rules with first match winning
#[must_use]
pub fn reproductive_stage(age: u32, amh: f64) -> MenopauseStage {
    if age < 40 && amh > 2.0 {
        MenopauseStage::Reproductive
    } else if age < 45 && amh > 1.0 {
        MenopauseStage::Reproductive
    } else if amh > 0.5 {
        MenopauseStage::EarlyTransition
    } else if amh > 0.1 {
        MenopauseStage::LateTransition
    } else if age < 65 {
        MenopauseStage::EarlyPostmenopause
    } else {
        MenopauseStage::LatePostmenopause
    }
}

fn recommendations_for(stage: MenopauseStage, time_remaining: f64, smoking: bool) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    match stage {
        MenopauseStage::Reproductive => recommendations.extend(
            [
                "Regular reproductive health monitoring",
                "Consider fertility preservation if delaying pregnancy",
                "Maintain bone health with weight-bearing exercise",
            ]
            .map(String::from),
        ),
        MenopauseStage::EarlyTransition => recommendations.extend(
            [
                "Monitor for irregular menstrual cycles",
                "Discuss contraception needs (still fertile)",
                "Begin bone density screening",
                "Consider cardiovascular risk assessment",
            ]
            .map(String::from),
        ),
        MenopauseStage::LateTransition => recommendations.extend(
            [
                "Expect increasing menopausal symptoms",
                "Discuss hormone therapy options",
                "Optimize bone health and cardiovascular health",
                "Consider fertility preservation if pregnancy desired",
            ]
            .map(String::from),
        ),
        MenopauseStage::EarlyPostmenopause | MenopauseStage::LatePostmenopause => {}
    }

    if time_remaining < 5.0 {
        recommendations
            .push("Consider expedited fertility evaluation if pregnancy desired".to_string());
    }

    if smoking {
        recommendations.push("Smoking cessation counseling to delay menopause".to_string());
    }

    recommendations
}

fn evidence_base() -> FxHashMap<&'static str, &'static str> {
    let mut base = FxHashMap::default();
    base.insert("study", "SWAN (Study of Women's Health Across the Nation)");
    base.insert("model", "Freeman et al. 2024 AMH-based prediction");
    base.insert("population", "Multi-ethnic US cohort (n=3,302)");
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prediction_clamps_years_remaining() {
        // Very high AMH at a young age hits the 15-year ceiling
        assert_eq!(base_menopause_prediction(25, 10.0), 40.0);
        // Unmeasurable AMH short-circuits to half a year
        assert_eq!(base_menopause_prediction(50, 0.005), 50.5);
        assert_eq!(base_menopause_prediction(50, 0.01), 50.5);
    }

    #[test]
    fn test_stage_rules_first_match_wins() {
        assert_eq!(reproductive_stage(30, 3.0), MenopauseStage::Reproductive);
        assert_eq!(reproductive_stage(43, 1.5), MenopauseStage::Reproductive);
        assert_eq!(reproductive_stage(43, 0.8), MenopauseStage::EarlyTransition);
        assert_eq!(reproductive_stage(48, 0.3), MenopauseStage::LateTransition);
        assert_eq!(reproductive_stage(55, 0.05), MenopauseStage::EarlyPostmenopause);
        assert_eq!(reproductive_stage(70, 0.05), MenopauseStage::LatePostmenopause);
        // High AMH at an older age still falls through to the AMH bands
        assert_eq!(reproductive_stage(46, 3.0), MenopauseStage::EarlyTransition);
    }
}
