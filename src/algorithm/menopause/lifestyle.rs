//! Lifestyle-based menopause age estimate
//!
//! A coarser model than the AMH-based prediction: it starts from the
//! population baseline of 51 years and applies fixed adjustments for
//! genetics, smoking history, BMI, exercise, and stress. Maternal
//! menopause age is the strongest predictor and is mirrored at 70%.

use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::models::biomarker::{ActivityLevel, LifestyleInput, SmokingStatus};
use crate::models::menopause::{FactorAdjustment, FactorImpact, LifestyleEstimate};

/// Population average menopause age, years
pub const BASELINE_MENOPAUSE_AGE: f64 = 51.0;

/// Estimate menopause age from genetics and lifestyle factors
pub fn estimate_menopause_age(
    config: &CalculatorConfig,
    input: &LifestyleInput,
) -> Result<LifestyleEstimate> {
    super::super::validate_age(config, input.current_age)?;

    let mut estimated_age = BASELINE_MENOPAUSE_AGE;
    let mut adjustments: Vec<FactorAdjustment> = Vec::new();

    let mut apply = |years: f64, factor: &str, impact: FactorImpact| {
        estimated_age += years;
        if config.log_adjustments {
            log::debug!("lifestyle factor {factor}: {years:+.1}y -> {estimated_age:.1}");
        }
        adjustments.push(FactorAdjustment {
            factor: factor.to_string(),
            adjustment_years: super::super::round1(years),
            impact,
        });
    };

    if let Some(mothers_age) = input.mothers_menopause_age {
        // Daughters tend to mirror maternal timing within a few years
        let genetic_adjustment = (f64::from(mothers_age) - BASELINE_MENOPAUSE_AGE) * 0.7;
        apply(genetic_adjustment, "Genetics (mother's age)", FactorImpact::High);
    }

    match input.smoking {
        SmokingStatus::Current => apply(-2.0, "Current smoking", FactorImpact::High),
        SmokingStatus::Former => apply(-0.5, "Former smoking", FactorImpact::Low),
        SmokingStatus::Never => {}
    }

    if let Some(bmi) = input.bmi {
        if bmi < 18.5 {
            apply(-1.0, "Low BMI (underweight)", FactorImpact::Moderate);
        } else if bmi > 30.0 {
            apply(0.5, "High BMI (obesity)", FactorImpact::Low);
        }
    }

    match input.exercise {
        ActivityLevel::High => apply(0.5, "High exercise frequency", FactorImpact::Low),
        ActivityLevel::Low => apply(-0.3, "Low exercise frequency", FactorImpact::Low),
        ActivityLevel::Moderate => {}
    }

    if input.stress == ActivityLevel::High {
        apply(-0.5, "High stress levels", FactorImpact::Low);
    }

    let estimated_age = super::super::round1(estimated_age).clamp(40.0, 60.0);
    let years_until = (estimated_age - f64::from(input.current_age)).max(0.0);

    let cycle_changes_note = (input.cycle_changes && input.current_age >= 40).then(|| {
        "Currently experiencing cycle changes - likely in perimenopause transition".to_string()
    });

    Ok(LifestyleEstimate {
        estimated_menopause_age: estimated_age,
        years_until_menopause: super::super::round1(years_until),
        baseline_age: BASELINE_MENOPAUSE_AGE,
        adjustments,
        cycle_changes_note,
    })
}
