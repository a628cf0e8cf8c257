//! Biomarker input bundles
//!
//! One input struct per calculator. Mandatory biomarkers go through the
//! constructor; optional ones are attached with builder-style `with_*`
//! methods. None of the structs validate their values on construction;
//! strict range checking is an opt-in calculator config flag.

use serde::{Deserialize, Serialize};

/// Input for ovarian reserve assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveInput {
    /// Patient age in years
    pub age: u32,
    /// Anti-Müllerian hormone (ng/mL)
    pub amh: f64,
    /// Follicle stimulating hormone (mIU/mL)
    pub fsh: Option<f64>,
    /// Antral follicle count from ultrasound
    pub afc: Option<u32>,
}

impl ReserveInput {
    /// Create an input with the mandatory biomarkers
    #[must_use]
    pub const fn new(age: u32, amh: f64) -> Self {
        Self {
            age,
            amh,
            fsh: None,
            afc: None,
        }
    }

    /// Attach an FSH measurement
    #[must_use]
    pub const fn with_fsh(mut self, fsh: f64) -> Self {
        self.fsh = Some(fsh);
        self
    }

    /// Attach an antral follicle count
    #[must_use]
    pub const fn with_afc(mut self, afc: u32) -> Self {
        self.afc = Some(afc);
        self
    }
}

/// Input for IVF success prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IvfInput {
    /// Patient age in years
    pub age: u32,
    /// Anti-Müllerian hormone (ng/mL)
    pub amh: f64,
    /// Treatment cycle type, "fresh" or "frozen"; anything else is rejected
    pub cycle_type: String,
    /// Number of prior pregnancies
    pub prior_pregnancies: u32,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Primary infertility diagnosis; unrecognized strings resolve to a
    /// zero-effect adjustment rather than an error
    pub diagnosis: Option<String>,
}

impl IvfInput {
    /// Create an input for a fresh cycle with the mandatory biomarkers
    #[must_use]
    pub fn new(age: u32, amh: f64) -> Self {
        Self {
            age,
            amh,
            cycle_type: "fresh".to_string(),
            prior_pregnancies: 0,
            bmi: None,
            diagnosis: None,
        }
    }

    /// Set the treatment cycle type
    #[must_use]
    pub fn with_cycle_type(mut self, cycle_type: impl Into<String>) -> Self {
        self.cycle_type = cycle_type.into();
        self
    }

    /// Set the number of prior pregnancies
    #[must_use]
    pub fn with_prior_pregnancies(mut self, count: u32) -> Self {
        self.prior_pregnancies = count;
        self
    }

    /// Attach a BMI measurement
    #[must_use]
    pub fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    /// Attach a primary infertility diagnosis
    #[must_use]
    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = Some(diagnosis.into());
        self
    }
}

/// Input for menopause timing prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenopauseInput {
    /// Current age in years
    pub age: u32,
    /// Current anti-Müllerian hormone (ng/mL)
    pub amh: f64,
    /// Current smoking status
    pub smoking: bool,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Family history of menopause timing: "early" (<45), "normal" (45-55),
    /// "late" (>55); unrecognized strings count as normal
    pub family_history: Option<String>,
    /// Free-text ethnicity, matched case-insensitively by substring
    pub ethnicity: Option<String>,
    /// Number of live births
    pub parity: u32,
}

impl MenopauseInput {
    /// Create an input with the mandatory biomarkers
    #[must_use]
    pub fn new(age: u32, amh: f64) -> Self {
        Self {
            age,
            amh,
            smoking: false,
            bmi: None,
            family_history: None,
            ethnicity: None,
            parity: 0,
        }
    }

    /// Set the smoking status
    #[must_use]
    pub fn with_smoking(mut self, smoking: bool) -> Self {
        self.smoking = smoking;
        self
    }

    /// Attach a BMI measurement
    #[must_use]
    pub fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    /// Attach a family history category
    #[must_use]
    pub fn with_family_history(mut self, history: impl Into<String>) -> Self {
        self.family_history = Some(history.into());
        self
    }

    /// Attach an ethnicity
    #[must_use]
    pub fn with_ethnicity(mut self, ethnicity: impl Into<String>) -> Self {
        self.ethnicity = Some(ethnicity.into());
        self
    }

    /// Set the number of live births
    #[must_use]
    pub fn with_parity(mut self, parity: u32) -> Self {
        self.parity = parity;
        self
    }
}

/// Smoking status for the lifestyle menopause estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    /// Never smoked
    Never,
    /// Former smoker
    Former,
    /// Currently smoking
    Current,
}

impl From<&str> for SmokingStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "current" => Self::Current,
            "former" => Self::Former,
            _ => Self::Never,
        }
    }
}

/// Exercise frequency or stress level grading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Low
    Low,
    /// Moderate (the neutral default)
    Moderate,
    /// High
    High,
}

impl From<&str> for ActivityLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Moderate,
        }
    }
}

/// Input for the lifestyle-based menopause age estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleInput {
    /// Current age in years
    pub current_age: u32,
    /// Age at which the patient's mother reached menopause, if known
    pub mothers_menopause_age: Option<u32>,
    /// Smoking history
    pub smoking: SmokingStatus,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Exercise frequency
    pub exercise: ActivityLevel,
    /// Stress level
    pub stress: ActivityLevel,
    /// Whether the patient is experiencing menstrual cycle changes
    pub cycle_changes: bool,
}

impl LifestyleInput {
    /// Create an input with neutral lifestyle factors
    #[must_use]
    pub const fn new(current_age: u32) -> Self {
        Self {
            current_age,
            mothers_menopause_age: None,
            smoking: SmokingStatus::Never,
            bmi: None,
            exercise: ActivityLevel::Moderate,
            stress: ActivityLevel::Moderate,
            cycle_changes: false,
        }
    }

    /// Attach the mother's menopause age
    #[must_use]
    pub const fn with_mothers_menopause_age(mut self, age: u32) -> Self {
        self.mothers_menopause_age = Some(age);
        self
    }

    /// Set the smoking history
    #[must_use]
    pub const fn with_smoking(mut self, smoking: SmokingStatus) -> Self {
        self.smoking = smoking;
        self
    }

    /// Attach a BMI measurement
    #[must_use]
    pub const fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    /// Set the exercise frequency
    #[must_use]
    pub const fn with_exercise(mut self, level: ActivityLevel) -> Self {
        self.exercise = level;
        self
    }

    /// Set the stress level
    #[must_use]
    pub const fn with_stress(mut self, level: ActivityLevel) -> Self {
        self.stress = level;
        self
    }

    /// Flag ongoing menstrual cycle changes
    #[must_use]
    pub const fn with_cycle_changes(mut self, cycle_changes: bool) -> Self {
        self.cycle_changes = cycle_changes;
        self
    }
}
