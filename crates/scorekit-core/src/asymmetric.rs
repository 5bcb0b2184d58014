//! Asymmetric loss functions for business forecasting tasks.
//!
//! Plain MSE treats over- and under-forecasts alike. The losses here rescale
//! the residual so that the costlier direction for the business is punished
//! harder:
//!
//! - [`turnover_error`]: inventory turnover. Residuals are normalized by the
//!   prediction, so a forecast that falls short of demand (stock-out) costs
//!   more than one that overshoots by the same amount.
//! - [`ltv_error`]: client lifetime value. Residuals are scaled by the
//!   prediction itself, so overestimating a large client is the expensive
//!   mistake.
//! - [`weighted_turnover_error`]: turnover loss with explicit per-direction
//!   coefficients (see [`AsymmetryWeights`]).
//!
//! All functions expect index-aligned, equal-length, non-empty inputs and
//! return an error otherwise.

use crate::config::{AsymmetryWeights, NEUTRAL_WEIGHT};
use crate::error::{MetricError, Result};
use tracing::debug;

/// Mean squared error relative to the prediction.
///
/// # Formula
///
/// ```text
/// TE = mean( ((y_true_i - y_pred_i) / y_pred_i)^2 )
/// ```
///
/// # Errors
///
/// - [`MetricError::LengthMismatch`] if the inputs differ in length
/// - [`MetricError::EmptyInput`] if the inputs are empty
/// - [`MetricError::ZeroPrediction`] for the first zero in `y_pred`
///
/// # Example
///
/// ```
/// use scorekit_core::asymmetric::turnover_error;
///
/// let loss = turnover_error(&[10.0, 20.0], &[8.0, 25.0]).unwrap();
/// assert!((loss - 0.05125).abs() < 1e-12);
/// ```
pub fn turnover_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    weighted_turnover_error(y_true, y_pred, AsymmetryWeights::symmetric())
}

/// Turnover loss with direction-dependent coefficients.
///
/// Each squared relative residual is multiplied by `weights.under` when the
/// prediction is below the truth and by `weights.over` when it is above.
/// Exact predictions contribute zero regardless of weights. With
/// [`AsymmetryWeights::default`] this is identical to [`turnover_error`].
///
/// # Errors
///
/// Same as [`turnover_error`], plus [`MetricError::InvalidWeight`] if either
/// coefficient is not finite and positive.
pub fn weighted_turnover_error(
    y_true: &[f64],
    y_pred: &[f64],
    weights: AsymmetryWeights,
) -> Result<f64> {
    weights.validate()?;
    check_pair(y_true, y_pred)?;

    if let Some(index) = y_pred.iter().position(|&p| p == 0.0) {
        debug!("turnover_error: rejecting zero prediction at index {}", index);
        return Err(MetricError::ZeroPrediction { index });
    }

    let total: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| {
            let relative = (t - p) / p;
            direction_weight(t, p, &weights) * relative * relative
        })
        .sum();

    Ok(total / y_true.len() as f64)
}

/// Mean squared error scaled by the prediction magnitude.
///
/// # Formula
///
/// ```text
/// LTV = mean( ((y_true_i - y_pred_i) * y_pred_i)^2 )
/// ```
///
/// Defined for all real inputs.
///
/// # Errors
///
/// - [`MetricError::LengthMismatch`] if the inputs differ in length
/// - [`MetricError::EmptyInput`] if the inputs are empty
pub fn ltv_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_pair(y_true, y_pred)?;

    let total: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| {
            let scaled = (t - p) * p;
            scaled * scaled
        })
        .sum();

    Ok(total / y_true.len() as f64)
}

/// Validates that a prediction pair is aligned and non-empty.
fn check_pair(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        debug!(
            "Rejecting prediction pair: {} truths vs {} predictions",
            y_true.len(),
            y_pred.len()
        );
        return Err(MetricError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(MetricError::EmptyInput("prediction pair has no elements"));
    }
    Ok(())
}

#[inline]
fn direction_weight(truth: f64, pred: f64, weights: &AsymmetryWeights) -> f64 {
    if pred < truth {
        weights.under
    } else if pred > truth {
        weights.over
    } else {
        NEUTRAL_WEIGHT
    }
}

// ============================================================================
// Tests
// ============================================================================
