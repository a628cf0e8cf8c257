//! Age-bucketed AMH percentile reference table
//!
//! Breakpoints are in ng/mL at the 5th/25th/50th/75th/95th percentiles,
//! from large population studies. Rows are keyed by reference age in
//! 5-year steps; lookups snap to the nearest row, ties toward the lower
//! bracket.

use crate::error::{CalculatorError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Percentile breakpoints for one reference age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmhPercentileRow {
    /// Reference age in years
    pub age: u32,
    /// 5th percentile AMH (ng/mL)
    pub p5: f64,
    /// 25th percentile AMH (ng/mL)
    pub p25: f64,
    /// 50th percentile AMH (ng/mL)
    pub p50: f64,
    /// 75th percentile AMH (ng/mL)
    pub p75: f64,
    /// 95th percentile AMH (ng/mL)
    pub p95: f64,
}

/// AMH percentile table, rows sorted by ascending age
///
/// Deserialization routes through [`AmhPercentileTable::new`], so a table
/// obtained from any source has already passed `validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAmhPercentileTable")]
pub struct AmhPercentileTable {
    rows: Vec<AmhPercentileRow>,
}

/// Unvalidated wire form of the table
#[derive(Deserialize)]
struct RawAmhPercentileTable {
    rows: Vec<AmhPercentileRow>,
}

impl TryFrom<RawAmhPercentileTable> for AmhPercentileTable {
    type Error = CalculatorError;

    fn try_from(raw: RawAmhPercentileTable) -> Result<Self> {
        Self::new(raw.rows)
    }
}

impl Default for AmhPercentileTable {
    fn default() -> Self {
        Self {
            rows: vec![
                AmhPercentileRow { age: 25, p5: 0.9, p25: 2.3, p50: 4.1, p75: 6.8, p95: 11.2 },
                AmhPercentileRow { age: 30, p5: 0.7, p25: 1.8, p50: 3.2, p75: 5.4, p95: 9.1 },
                AmhPercentileRow { age: 35, p5: 0.5, p25: 1.2, p50: 2.1, p75: 3.6, p95: 6.2 },
                AmhPercentileRow { age: 40, p5: 0.3, p25: 0.7, p50: 1.2, p75: 2.1, p95: 3.8 },
                AmhPercentileRow { age: 45, p5: 0.1, p25: 0.3, p50: 0.6, p75: 1.0, p95: 1.8 },
            ],
        }
    }
}

impl AmhPercentileTable {
    /// Build a table from rows, enforcing the table invariants
    pub fn new(rows: Vec<AmhPercentileRow>) -> Result<Self> {
        let table = Self { rows };
        table.validate()?;
        Ok(table)
    }

    /// Check the table invariants: at least one row, ages strictly
    /// ascending, breakpoints strictly increasing within each row
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(CalculatorError::ReferenceData(
                "AMH percentile table has no rows".to_string(),
            ));
        }
        for (lower, upper) in self.rows.iter().tuple_windows() {
            if lower.age >= upper.age {
                return Err(CalculatorError::ReferenceData(format!(
                    "AMH table ages not ascending: {} before {}",
                    lower.age, upper.age
                )));
            }
        }
        for row in &self.rows {
            let breakpoints = [row.p5, row.p25, row.p50, row.p75, row.p95];
            if breakpoints.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(CalculatorError::ReferenceData(format!(
                    "AMH table row {} has a non-finite or negative breakpoint",
                    row.age
                )));
            }
            for (lo, hi) in breakpoints.iter().tuple_windows() {
                if lo >= hi {
                    return Err(CalculatorError::ReferenceData(format!(
                        "AMH table row {} breakpoints not strictly increasing",
                        row.age
                    )));
                }
            }
        }
        Ok(())
    }

    /// The reference rows in ascending age order
    #[must_use]
    pub fn rows(&self) -> &[AmhPercentileRow] {
        &self.rows
    }

    /// Nearest reference row by absolute age distance, ties toward the
    /// lower bracket (first minimal row in ascending order wins)
    #[must_use]
    pub fn nearest_row(&self, age: u32) -> &AmhPercentileRow {
        self.rows
            .iter()
            .min_by_key(|row| row.age.abs_diff(age))
            .expect("validated: table has at least one row")
    }

    /// Median (50th percentile) AMH of the nearest reference row
    #[must_use]
    pub fn median_for_age(&self, age: u32) -> f64 {
        self.nearest_row(age).p50
    }

    /// Median AMH linearly interpolated between the two rows bracketing
    /// `age`; outside the tabulated range this falls back to the nearest
    /// row's median
    #[must_use]
    pub fn interpolated_median(&self, age: u32) -> f64 {
        let nearest = self.nearest_row(age);
        let max_age = self.rows.last().map_or(nearest.age, |row| row.age);
        if age == nearest.age || age >= max_age {
            return nearest.p50;
        }
        for (lower, upper) in self.rows.iter().tuple_windows() {
            if age > lower.age && age < upper.age {
                let weight = f64::from(age - lower.age) / f64::from(upper.age - lower.age);
                return lower.p50 + weight * (upper.p50 - lower.p50);
            }
        }
        nearest.p50
    }

    /// Age-adjusted AMH percentile in [5, 95]
    ///
    /// Classifies `amh` against the nearest row's breakpoints by linear
    /// interpolation within the enclosing breakpoint interval. Values at or
    /// below the 5th breakpoint floor to 5; values above the 95th ceiling
    /// to 95.
    #[must_use]
    pub fn percentile_for(&self, age: u32, amh: f64) -> u8 {
        let row = self.nearest_row(age);
        if amh <= row.p5 {
            return 5;
        }
        let breakpoints = [
            (row.p5, 5.0),
            (row.p25, 25.0),
            (row.p50, 50.0),
            (row.p75, 75.0),
            (row.p95, 95.0),
        ];
        for (&(lo_amh, lo_pct), &(hi_amh, hi_pct)) in breakpoints.iter().tuple_windows() {
            if amh <= hi_amh {
                let ratio = (amh - lo_amh) / (hi_amh - lo_amh);
                return (lo_pct + ratio * (hi_pct - lo_pct)) as u8;
            }
        }
        95
    }
}
