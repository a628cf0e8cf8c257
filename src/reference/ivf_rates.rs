//! Age-bucketed IVF base live-birth rates (SART 2023 national summary)

use crate::error::{CalculatorError, Result};
use crate::models::ivf::CycleType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SART reporting age brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBracket {
    /// Under 35
    #[serde(rename = "under_35")]
    Under35,
    /// 35 to 37
    #[serde(rename = "35_37")]
    From35To37,
    /// 38 to 40
    #[serde(rename = "38_40")]
    From38To40,
    /// 41 to 42
    #[serde(rename = "41_42")]
    From41To42,
    /// 43 to 44
    #[serde(rename = "43_44")]
    From43To44,
    /// Over 44
    #[serde(rename = "over_44")]
    Over44,
}

impl AgeBracket {
    /// Bracket a patient age
    #[must_use]
    pub const fn for_age(age: u32) -> Self {
        if age < 35 {
            Self::Under35
        } else if age <= 37 {
            Self::From35To37
        } else if age <= 40 {
            Self::From38To40
        } else if age <= 42 {
            Self::From41To42
        } else if age <= 44 {
            Self::From43To44
        } else {
            Self::Over44
        }
    }

    /// Get the wire label for this bracket
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under35 => "under_35",
            Self::From35To37 => "35_37",
            Self::From38To40 => "38_40",
            Self::From41To42 => "41_42",
            Self::From43To44 => "43_44",
            Self::Over44 => "over_44",
        }
    }

    /// All brackets in ascending age order
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Under35,
            Self::From35To37,
            Self::From38To40,
            Self::From41To42,
            Self::From43To44,
            Self::Over44,
        ]
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Base live-birth percentages for one age bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IvfRateRow {
    /// Age bracket this row covers
    pub bracket: AgeBracket,
    /// Fresh transfer live-birth rate, percent
    pub fresh: f64,
    /// Frozen transfer live-birth rate, percent
    pub frozen: f64,
}

/// IVF base rate table keyed by age bracket
///
/// Deserialization routes through [`IvfBaseRateTable::new`], so a table
/// obtained from any source has already passed `validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIvfBaseRateTable")]
pub struct IvfBaseRateTable {
    rows: Vec<IvfRateRow>,
}

/// Unvalidated wire form of the table
#[derive(Deserialize)]
struct RawIvfBaseRateTable {
    rows: Vec<IvfRateRow>,
}

impl TryFrom<RawIvfBaseRateTable> for IvfBaseRateTable {
    type Error = CalculatorError;

    fn try_from(raw: RawIvfBaseRateTable) -> Result<Self> {
        Self::new(raw.rows)
    }
}

impl Default for IvfBaseRateTable {
    fn default() -> Self {
        Self {
            rows: vec![
                IvfRateRow { bracket: AgeBracket::Under35, fresh: 45.2, frozen: 48.6 },
                IvfRateRow { bracket: AgeBracket::From35To37, fresh: 36.8, frozen: 42.1 },
                IvfRateRow { bracket: AgeBracket::From38To40, fresh: 25.1, frozen: 34.2 },
                IvfRateRow { bracket: AgeBracket::From41To42, fresh: 13.4, frozen: 23.8 },
                IvfRateRow { bracket: AgeBracket::From43To44, fresh: 5.8, frozen: 16.2 },
                IvfRateRow { bracket: AgeBracket::Over44, fresh: 2.1, frozen: 8.4 },
            ],
        }
    }
}

impl IvfBaseRateTable {
    /// Build a table from rows, enforcing the table invariants
    pub fn new(rows: Vec<IvfRateRow>) -> Result<Self> {
        let table = Self { rows };
        table.validate()?;
        Ok(table)
    }

    /// Check the table invariants: every bracket present exactly once,
    /// all rates inside (0, 100)
    pub fn validate(&self) -> Result<()> {
        for bracket in AgeBracket::all() {
            let count = self.rows.iter().filter(|r| r.bracket == bracket).count();
            if count != 1 {
                return Err(CalculatorError::ReferenceData(format!(
                    "IVF rate table has {count} rows for bracket {bracket}, expected 1"
                )));
            }
        }
        for row in &self.rows {
            for rate in [row.fresh, row.frozen] {
                if !rate.is_finite() || rate <= 0.0 || rate >= 100.0 {
                    return Err(CalculatorError::ReferenceData(format!(
                        "IVF rate table bracket {} has out-of-range rate {rate}",
                        row.bracket
                    )));
                }
            }
        }
        Ok(())
    }

    /// The table rows
    #[must_use]
    pub fn rows(&self) -> &[IvfRateRow] {
        &self.rows
    }

    /// Base live-birth rate for an age and cycle type
    pub fn base_rate(&self, age: u32, cycle_type: CycleType) -> Result<f64> {
        let bracket = AgeBracket::for_age(age);
        let row = self
            .rows
            .iter()
            .find(|r| r.bracket == bracket)
            .ok_or_else(|| {
                CalculatorError::ReferenceData(format!("no base rate row for bracket {bracket}"))
            })?;
        Ok(match cycle_type {
            CycleType::Fresh => row.fresh,
            CycleType::Frozen => row.frozen,
        })
    }
}
