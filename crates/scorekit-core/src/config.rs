//! Configuration for the metric functions.
//!
//! Holds the named defaults used across the crate and the serde-backed
//! [`AsymmetryWeights`] that parameterize [`weighted_turnover_error`].
//!
//! # Usage
//!
//! ```
//! use scorekit_core::config::{AsymmetryWeights, NEUTRAL_WEIGHT};
//!
//! // Penalize under-forecasting twice as hard as over-forecasting
//! let weights = AsymmetryWeights::new(2.0, NEUTRAL_WEIGHT);
//! assert!(weights.validate().is_ok());
//! ```
//!
//! [`weighted_turnover_error`]: crate::asymmetric::weighted_turnover_error

use crate::error::{MetricError, Result};
use crate::ranking::DcgMethod;
use serde::{Deserialize, Serialize};

// =============================================================================
// Defaults
// =============================================================================

/// Coefficient that leaves a residual unscaled.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// DCG variant used when a caller does not pick one.
pub const DEFAULT_METHOD: DcgMethod = DcgMethod::Standard;

fn neutral_weight() -> f64 {
    NEUTRAL_WEIGHT
}

// =============================================================================
// Asymmetry weights
// =============================================================================

/// Multiplicative coefficients applied to forecast residuals by direction.
///
/// `under` scales residuals where the prediction fell short of the truth,
/// `over` scales residuals where it exceeded it. The default is symmetric.
///
/// Deserializes from e.g. `{"under": 1.5, "over": 0.8}`; a missing field
/// falls back to [`NEUTRAL_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsymmetryWeights {
    /// Coefficient for `pred < true`
    #[serde(default = "neutral_weight")]
    pub under: f64,
    /// Coefficient for `pred > true`
    #[serde(default = "neutral_weight")]
    pub over: f64,
}

impl AsymmetryWeights {
    pub fn new(under: f64, over: f64) -> Self {
        Self { under, over }
    }

    /// Symmetric weights (both coefficients neutral).
    pub fn symmetric() -> Self {
        Self::new(NEUTRAL_WEIGHT, NEUTRAL_WEIGHT)
    }

    /// Returns true if both coefficients are neutral.
    pub fn is_symmetric(&self) -> bool {
        self.under == NEUTRAL_WEIGHT && self.over == NEUTRAL_WEIGHT
    }

    /// Checks that both coefficients are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("under", self.under), ("over", self.over)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MetricError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for AsymmetryWeights {
    fn default() -> Self {
        Self::symmetric()
    }
}
