//! IVF success prediction
//!
//! Starts from the age-bracket base rate, applies a bounded AMH-ratio
//! adjustment, then folds the clinical adjustments (prior pregnancies, BMI,
//! diagnosis) over the running rate in that order. The final rate is
//! clamped to [1, 75] percent and extended to a 3-cycle cumulative figure
//! under an independence assumption.

use crate::algorithm::adjustment::{RateAdjustment, apply_rate_adjustments};
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::models::biomarker::IvfInput;
use crate::models::ivf::{CycleType, IvfDiagnosis, IvfSuccessResult};
use crate::reference::ReferenceData;
use rustc_hash::FxHashMap;

/// Lower clamp for the predicted per-cycle rate, percent
const MIN_RATE_PCT: f64 = 1.0;
/// Upper clamp for the predicted per-cycle rate, percent
const MAX_RATE_PCT: f64 = 75.0;
/// Half-width of the rate confidence interval, percent
const CI_HALF_WIDTH_PCT: f64 = 8.0;

/// Predict the per-cycle live-birth rate for an IVF treatment
pub fn predict_ivf_success(
    reference: &ReferenceData,
    config: &CalculatorConfig,
    input: &IvfInput,
) -> Result<IvfSuccessResult> {
    super::validate_biomarkers(config, input.age, input.amh)?;
    let cycle_type: CycleType = input.cycle_type.parse()?;

    let base_rate = reference.ivf_base_rates.base_rate(input.age, cycle_type)?;
    let amh_adjusted_rate = adjust_for_amh(reference, base_rate, input.age, input.amh);
    if config.log_adjustments {
        log::debug!(
            "age {} {cycle_type} cycle: base rate {base_rate:.1}%, AMH-adjusted {amh_adjusted_rate:.2}%",
            input.age
        );
    }

    let mut clinical_factors: FxHashMap<&'static str, f64> = FxHashMap::default();
    clinical_factors.insert("base_age_rate", base_rate);

    // Adjustments compound against the running rate, so application order
    // is part of the contract
    let mut steps: Vec<RateAdjustment> = Vec::new();
    if input.prior_pregnancies > 0 {
        let boost = (f64::from(input.prior_pregnancies) * 8.0).min(15.0);
        steps.push(RateAdjustment { label: "prior_pregnancy_boost", percent: boost });
    }
    if let Some(bmi) = input.bmi {
        steps.push(RateAdjustment { label: "bmi_adjustment", percent: bmi_adjustment_pct(bmi) });
    }
    if let Some(diagnosis) = input.diagnosis.as_deref() {
        let diagnosis = IvfDiagnosis::from(diagnosis);
        steps.push(RateAdjustment {
            label: "diagnosis_adjustment",
            percent: diagnosis.rate_adjustment_pct(),
        });
    }
    for step in &steps {
        clinical_factors.insert(step.label, step.percent);
    }

    let adjusted = apply_rate_adjustments(amh_adjusted_rate, &steps, config.log_adjustments);
    let final_rate = adjusted.clamp(MIN_RATE_PCT, MAX_RATE_PCT);

    // Probability of at least one live birth across 3 cycles, treating
    // cycles as independent
    let cumulative_3_cycles = (1.0 - (1.0 - final_rate / 100.0).powi(3)) * 100.0;

    let ci_lower = (final_rate - CI_HALF_WIDTH_PCT).max(MIN_RATE_PCT);
    let ci_upper = (final_rate + CI_HALF_WIDTH_PCT).min(MAX_RATE_PCT);

    Ok(IvfSuccessResult {
        live_birth_rate: super::round1(final_rate),
        confidence_interval: (super::round1(ci_lower), super::round1(ci_upper)),
        cumulative_success_3_cycles: super::round1(cumulative_3_cycles),
        age_adjusted_rate: super::round1(base_rate),
        amh_adjusted_rate: super::round1(amh_adjusted_rate),
        clinical_factors,
        recommendations: recommendations_for(final_rate, input.age, input.amh),
        evidence_base: evidence_base(),
    })
}

/// Bounded multiplicative AMH adjustment against the expected median for age
fn adjust_for_amh(reference: &ReferenceData, base_rate: f64, age: u32, amh: f64) -> f64 {
    let expected_amh = reference.amh_percentiles.median_for_age(age);
    let amh_ratio = amh / expected_amh;

    let adjustment_pct = if amh_ratio < 0.25 {
        -25.0
    } else if amh_ratio < 0.5 {
        -15.0
    } else if amh_ratio < 0.75 {
        -8.0
    } else if amh_ratio > 2.0 {
        5.0
    } else {
        0.0
    };

    base_rate * (1.0 + adjustment_pct / 100.0)
}

/// BMI adjustment in percent of the running rate
const fn bmi_adjustment_pct(bmi: f64) -> f64 {
    if bmi < 18.5 {
        -8.0
    } else if bmi > 30.0 {
        -12.0
    } else if bmi > 25.0 {
        -5.0
    } else {
        0.0
    }
}

fn recommendations_for(success_rate: f64, age: u32, amh: f64) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if success_rate < 10.0 {
        recommendations.extend(
            [
                "Success rate is low - consider donor egg IVF",
                "Genetic counseling recommended",
                "Consider multiple cycle planning",
                "Discuss realistic expectations with fertility specialist",
            ]
            .map(String::from),
        );
    } else if success_rate < 20.0 {
        recommendations.extend(
            [
                "Modified stimulation protocols may be beneficial",
                "Consider PGT-A testing",
                "Plan for potentially multiple cycles",
                "Optimize health before treatment",
            ]
            .map(String::from),
        );
    } else if success_rate >= 40.0 {
        recommendations.extend(
            [
                "Good prognosis for IVF success",
                "Single embryo transfer recommended to reduce multiple pregnancy risk",
                "Consider freeze-all strategy if high AMH",
            ]
            .map(String::from),
        );
    }

    // Age and AMH tiers are independent of the rate tier and of each other
    if age >= 42 {
        recommendations.push("Time-sensitive - expedited treatment recommended".to_string());
    } else if age >= 38 {
        recommendations.push("Consider accelerated treatment timeline".to_string());
    }

    if amh < 1.0 {
        recommendations.push("Low AMH - consider mini-IVF or natural cycle protocols".to_string());
    } else if amh > 5.0 {
        recommendations.push("High AMH - monitor for OHSS risk".to_string());
    }

    recommendations
}

fn evidence_base() -> FxHashMap<&'static str, &'static str> {
    let mut base = FxHashMap::default();
    base.insert("data_source", "SART 2023 National Summary");
    base.insert("model", "McLernon et al. 2024 prediction model");
    base.insert("validation", "External validation in US population");
    base
}
