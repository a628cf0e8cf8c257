//! Ovarian reserve assessment
//!
//! Computes an age-adjusted AMH percentile from the reference table, then
//! classifies the reserve category from AMH with FSH/AFC override rules,
//! and emits an interpretation plus category-specific recommendations.

use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::models::biomarker::ReserveInput;
use crate::models::reserve::{OvarianReserveCategory, OvarianReserveResult};
use crate::reference::ReferenceData;
use rustc_hash::FxHashMap;

/// Assess ovarian reserve from AMH with optional FSH/AFC corroboration
pub fn assess_ovarian_reserve(
    reference: &ReferenceData,
    config: &CalculatorConfig,
    input: &ReserveInput,
) -> Result<OvarianReserveResult> {
    super::validate_biomarkers(config, input.age, input.amh)?;

    let table = &reference.amh_percentiles;
    let percentile = table.percentile_for(input.age, input.amh);
    if config.log_adjustments {
        log::debug!(
            "age {}: nearest row {}, interpolated median {:.2} ng/mL, AMH {:.2} -> {}th percentile",
            input.age,
            table.nearest_row(input.age).age,
            table.interpolated_median(input.age),
            input.amh,
            percentile
        );
    }

    let category = classify_reserve(input.amh, input.fsh, input.afc, config.log_adjustments);

    // Percentile CI is a fixed +/- 10 band clamped to [1, 99]
    let ci_lower = percentile.saturating_sub(10).max(1);
    let ci_upper = (percentile + 10).min(99);

    Ok(OvarianReserveResult {
        category,
        percentile,
        confidence_interval: (ci_lower, ci_upper),
        clinical_interpretation: interpret(category, input.age, input.amh, percentile),
        recommendations: recommendations_for(category),
        evidence_base: evidence_base(),
    })
}

/// Classify reserve from AMH thresholds, then apply FSH and AFC overrides
///
/// Overrides run sequentially in FSH-then-AFC order; when more than one
/// fires, the last applied wins. Elevated FSH can only worsen the category;
/// AFC can move it in either direction.
pub fn classify_reserve(
    amh: f64,
    fsh: Option<f64>,
    afc: Option<u32>,
    log_overrides: bool,
) -> OvarianReserveCategory {
    use OvarianReserveCategory::{High, Low, Normal, VeryHigh, VeryLow};

    let mut category = if amh < 0.5 {
        VeryLow
    } else if amh < 1.0 {
        Low
    } else if amh < 4.0 {
        Normal
    } else if amh < 8.0 {
        High
    } else {
        VeryHigh
    };

    if let Some(fsh) = fsh {
        if fsh > 15.0 && category != VeryLow {
            if log_overrides {
                log::debug!("FSH {fsh} > 15 overrides {category} to low");
            }
            category = Low;
        } else if fsh > 20.0 {
            category = VeryLow;
        }
    }

    if let Some(afc) = afc {
        if afc < 5 && category != VeryLow {
            if log_overrides {
                log::debug!("AFC {afc} < 5 overrides {category} to low");
            }
            category = Low;
        } else if afc < 3 {
            category = VeryLow;
        } else if afc > 20 {
            if log_overrides {
                log::debug!("AFC {afc} > 20 overrides {category} to high");
            }
            category = High;
        }
    }

    category
}

fn interpret(category: OvarianReserveCategory, age: u32, amh: f64, percentile: u8) -> String {
    let detail = match category {
        OvarianReserveCategory::VeryLow => "Significantly reduced egg quantity.",
        OvarianReserveCategory::Low => "Below average egg quantity for age.",
        OvarianReserveCategory::Normal => "Age-appropriate egg quantity.",
        OvarianReserveCategory::High => "Above average egg quantity.",
        OvarianReserveCategory::VeryHigh => "Risk of OHSS with stimulation.",
    };
    format!(
        "{} (AMH {amh} ng/mL, {percentile}th percentile for age {age}). {detail}",
        category.display_name()
    )
}

fn recommendations_for(category: OvarianReserveCategory) -> Vec<String> {
    let guidance: &[&str] = match category {
        OvarianReserveCategory::VeryLow => &[
            "Urgent fertility consultation recommended",
            "Consider immediate fertility preservation if pregnancy desired",
            "IVF with PGT-A may be beneficial",
            "Donor egg consultation if pregnancy desired",
            "Repeat AMH in 6 months to confirm trend",
        ],
        OvarianReserveCategory::Low => &[
            "Expedited fertility evaluation if pregnancy desired",
            "Consider fertility preservation options",
            "IVF may require modified stimulation protocols",
            "Genetic counseling if family planning",
            "Lifestyle optimization for fertility",
        ],
        OvarianReserveCategory::Normal => &[
            "Standard fertility evaluation timeline appropriate",
            "Maintain healthy lifestyle for reproductive health",
            "Annual reproductive health checkups",
            "Consider fertility preservation after age 35 if delaying pregnancy",
        ],
        OvarianReserveCategory::High | OvarianReserveCategory::VeryHigh => &[
            "Risk of ovarian hyperstimulation syndrome (OHSS) with fertility treatments",
            "Modified stimulation protocols recommended for IVF",
            "Consider freeze-all strategy if undergoing IVF",
            "PCOS screening recommended",
        ],
    };
    guidance.iter().map(ToString::to_string).collect()
}

fn evidence_base() -> FxHashMap<&'static str, &'static str> {
    let mut base = FxHashMap::default();
    base.insert("guidelines", "ASRM 2024, ESHRE 2023");
    base.insert("population_data", "Nelson et al. 2023 (n=15,834)");
    base.insert("validation_studies", "Dewailly et al. 2024");
    base
}
