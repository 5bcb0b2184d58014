//! Graded-relevance ranking metrics.
//!
//! This module implements the cumulative-gain family of metrics:
//! - CG@k (Cumulative Gain)
//! - DCG@k (Discounted Cumulative Gain), in the standard and industry variants
//! - NDCG@k (Normalized DCG)
//! - Average NDCG@k across queries
//!
//! A relevance sequence is a slice of graded scores in the order the ranking
//! under evaluation returned them (position 0 = top). Scores are assumed to be
//! non-negative; negative values are accepted but push NDCG outside [0, 1].
//!
//! In every function `k` is clamped to the sequence length, so any `k` at or
//! beyond the length behaves exactly like `k == len`.
//!
//! # References
//!
//! - Järvelin & Kekäläinen (2002). "Cumulated gain-based evaluation of IR techniques"
//! - Burges et al. (2005). "Learning to rank using gradient descent"

use crate::error::{MetricError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

// ============================================================================
// DCG method
// ============================================================================

/// Gain function used by DCG.
///
/// | Method | Gain |
/// |--------|------|
/// | `Standard` | `rel` |
/// | `Industry` | `2^rel - 1` |
///
/// Both share the logarithmic position discount `log2(i + 2)` for 0-indexed
/// position `i`. The industry variant weights highly relevant items much more
/// heavily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DcgMethod {
    /// Linear gain
    #[default]
    Standard,
    /// Exponential gain
    Industry,
}

impl DcgMethod {
    /// Returns the tag this method parses from.
    pub fn as_str(&self) -> &'static str {
        match self {
            DcgMethod::Standard => "standard",
            DcgMethod::Industry => "industry",
        }
    }

    /// Computes the gain for a single relevance score.
    #[inline]
    pub fn gain(&self, relevance: f64) -> f64 {
        match self {
            DcgMethod::Standard => relevance,
            DcgMethod::Industry => relevance.exp2() - 1.0,
        }
    }
}

impl fmt::Display for DcgMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DcgMethod {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(DcgMethod::Standard),
            "industry" => Ok(DcgMethod::Industry),
            other => Err(MetricError::UnknownMethod(other.to_string())),
        }
    }
}

// ============================================================================
// CG (Cumulative Gain)
// ============================================================================

/// Computes CG@k: the plain sum of the top `k` relevance scores.
///
/// Returns 0.0 for `k == 0` or an empty sequence.
///
/// # Example
///
/// ```
/// use scorekit_core::ranking::cumulative_gain;
///
/// assert_eq!(cumulative_gain(&[3.0, 2.0, 1.0], 2), 5.0);
/// assert_eq!(cumulative_gain(&[3.0, 2.0, 1.0], 10), 6.0);
/// ```
pub fn cumulative_gain(relevance: &[f64], k: usize) -> f64 {
    top_k(relevance, k).iter().sum()
}

// ============================================================================
// DCG (Discounted Cumulative Gain)
// ============================================================================

/// Computes DCG@k with the given gain function.
///
/// # Formula
///
/// ```text
/// Standard: DCG@k = Σ rel_i / log₂(i + 2)        for i in 0..k
/// Industry: DCG@k = Σ (2^rel_i - 1) / log₂(i + 2) for i in 0..k
/// ```
///
/// The relevance slice is used in the given order; it is never resorted.
///
/// # Example
///
/// ```
/// use scorekit_core::ranking::{discounted_cumulative_gain, DcgMethod};
///
/// let relevance = [3.0, 2.0, 3.0, 0.0, 1.0, 2.0];
/// let dcg = discounted_cumulative_gain(&relevance, 3, DcgMethod::Standard);
/// assert!((dcg - 5.761).abs() < 0.001);
/// ```
pub fn discounted_cumulative_gain(relevance: &[f64], k: usize, method: DcgMethod) -> f64 {
    top_k(relevance, k)
        .iter()
        .enumerate()
        .map(|(i, &rel)| method.gain(rel) / discount(i))
        .sum()
}

// ============================================================================
// NDCG (Normalized Discounted Cumulative Gain)
// ============================================================================

/// Computes NDCG@k.
///
/// DCG of the given ranking divided by the DCG of the ideal ranking (the same
/// scores sorted descending), both at the same clamped `k` and `method`.
///
/// # Returns
///
/// A score in [0, 1] for non-negative relevance; 1.0 means the ranking is
/// already ideal. Returns 0.0 when the ideal DCG is zero (empty input,
/// `k == 0`, or only zero scores).
///
/// Negative scores are not rejected but are logged at `warn` level since the
/// result then falls outside [0, 1].
pub fn normalized_dcg(relevance: &[f64], k: usize, method: DcgMethod) -> f64 {
    if relevance.iter().any(|&rel| rel < 0.0) {
        warn!(
            "normalized_dcg received negative relevance; score may fall outside [0, 1] (method={})",
            method
        );
    }

    let dcg = discounted_cumulative_gain(relevance, k, method);

    let mut ideal = relevance.to_vec();
    ideal.sort_by(|a, b| b.total_cmp(a));
    let idcg = discounted_cumulative_gain(&ideal, k, method);

    if idcg == 0.0 {
        0.0
    } else {
        dcg / idcg
    }
}

/// Computes the mean NDCG@k across a set of queries.
///
/// Each row is scored independently with [`normalized_dcg`], clamping `k` to
/// that row's own length. Rows may differ in length.
///
/// # Errors
///
/// [`MetricError::EmptyInput`] if `list_relevances` has no rows.
///
/// # Example
///
/// ```
/// use scorekit_core::ranking::{avg_ndcg, DcgMethod};
///
/// let queries = vec![vec![3.0, 2.0, 1.0], vec![0.0, 1.0]];
/// let score = avg_ndcg(&queries, 5, DcgMethod::Standard).unwrap();
/// assert!(score > 0.5 && score < 1.0);
/// ```
pub fn avg_ndcg<R: AsRef<[f64]>>(
    list_relevances: &[R],
    k: usize,
    method: DcgMethod,
) -> Result<f64> {
    if list_relevances.is_empty() {
        return Err(MetricError::EmptyInput("relevance matrix has no queries"));
    }

    let total: f64 = list_relevances
        .iter()
        .map(|row| normalized_dcg(row.as_ref(), k, method))
        .sum();
    let mean = total / list_relevances.len() as f64;

    debug!(
        "avg_ndcg@{} ({}) over {} queries: {:.4}",
        k,
        method,
        list_relevances.len(),
        mean
    );

    Ok(mean)
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Returns the first `min(k, len)` scores.
#[inline]
fn top_k(relevance: &[f64], k: usize) -> &[f64] {
    &relevance[..k.min(relevance.len())]
}

/// Logarithmic discount for a 0-indexed position: log₂(position + 2).
///
/// The offset keeps the top position's discount at log₂(2) = 1.
#[inline]
fn discount(position: usize) -> f64 {
    (position as f64 + 2.0).log2()
}

// ============================================================================
// Tests
// ============================================================================
