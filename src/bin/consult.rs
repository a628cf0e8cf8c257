//! Demo binary running the calculators over a sample consultation profile
//!
//! Prints each result as JSON, the shape a host request layer would
//! serialize for its clients. Run with `RUST_LOG=debug` to see the
//! adjustment traces.

use anyhow::Result;
use repro_calc::{
    ClinicalCalculators, IvfInput, LifestyleInput, MenopauseInput, ReserveInput, SmokingStatus,
};

fn main() -> Result<()> {
    env_logger::init();

    let calculators = ClinicalCalculators::new();

    let reserve = calculators.assess_ovarian_reserve(
        &ReserveInput::new(38, 0.8).with_fsh(12.0).with_afc(6),
    )?;
    println!("=== Ovarian reserve assessment ===");
    println!("{}", serde_json::to_string_pretty(&reserve)?);

    let ivf = calculators.predict_ivf_success(
        &IvfInput::new(38, 0.8)
            .with_cycle_type("fresh")
            .with_bmi(24.0)
            .with_diagnosis("unexplained"),
    )?;
    println!("=== IVF success prediction ===");
    println!("{}", serde_json::to_string_pretty(&ivf)?);

    let menopause = calculators.predict_menopause_timing(
        &MenopauseInput::new(45, 0.3)
            .with_bmi(26.0)
            .with_family_history("normal")
            .with_ethnicity("caucasian")
            .with_parity(2),
    )?;
    println!("=== Menopause timing prediction ===");
    println!("{}", serde_json::to_string_pretty(&menopause)?);

    let lifestyle = calculators.estimate_menopause_age(
        &LifestyleInput::new(45)
            .with_mothers_menopause_age(49)
            .with_smoking(SmokingStatus::Former)
            .with_bmi(26.0)
            .with_cycle_changes(true),
    )?;
    println!("=== Lifestyle menopause estimate ===");
    println!("{}", serde_json::to_string_pretty(&lifestyle)?);

    Ok(())
}
