//! Configuration for the clinical calculators.

/// Configuration shared by all calculators
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Reject physiologically implausible inputs (negative AMH, age outside
    /// 18-65) instead of clamping. Off by default: the calculators resolve
    /// out-of-domain numbers to a best-effort estimate.
    pub validate_inputs: bool,
    /// Log every applied adjustment step at debug level
    pub log_adjustments: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            validate_inputs: false,
            log_adjustments: true,
        }
    }
}
