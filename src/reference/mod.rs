//! Static reference data shared by all calculators
//!
//! The three tables are loaded once, validated, and never mutated again.
//! Concurrent callers can share one `ReferenceData` freely. Defaults are
//! embedded; a host can also supply the tables as a JSON document.

pub mod amh;
pub mod ivf_rates;
pub mod menopause_factors;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use amh::{AmhPercentileRow, AmhPercentileTable};
pub use ivf_rates::{AgeBracket, IvfBaseRateTable, IvfRateRow};
pub use menopause_factors::{FactorEffect, MenopauseFactorTable};

/// Immutable reference data store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Age-bucketed AMH percentile bands
    pub amh_percentiles: AmhPercentileTable,
    /// Age-bucketed base IVF live-birth rates
    pub ivf_base_rates: IvfBaseRateTable,
    /// Named menopause timing effect sizes
    pub menopause_factors: MenopauseFactorTable,
}

impl ReferenceData {
    /// Parse and validate reference data from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Load and validate reference data from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        log::info!("loading reference data from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        log::info!(
            "loaded reference data: {} AMH rows, {} IVF rate rows",
            data.amh_percentiles.rows().len(),
            data.ivf_base_rates.rows().len()
        );
        Ok(data)
    }

    /// Check every table's invariants
    pub fn validate(&self) -> Result<()> {
        self.amh_percentiles.validate()?;
        self.ivf_base_rates.validate()?;
        self.menopause_factors.validate()?;
        Ok(())
    }
}
