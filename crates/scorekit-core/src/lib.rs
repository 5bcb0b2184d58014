//! # Scorekit Core
//!
//! Standalone scoring functions for forecasting and ranking evaluation.
//!
//! Every function is pure: it reads its inputs, never mutates them, and keeps
//! no state between calls, so all of them are safe to call concurrently.
//!
//! ## Modules
//!
//! - [`asymmetric`] - Direction-aware losses (inventory turnover, client LTV)
//! - [`ranking`] - CG, DCG, NDCG and average NDCG over graded relevance
//! - [`config`] - Named defaults and serde-backed asymmetry weights
//! - [`error`] - Error type shared by all metrics
//!
//! ## Example
//!
//! ```
//! use scorekit_core::asymmetric::ltv_error;
//! use scorekit_core::ranking::{normalized_dcg, DcgMethod};
//!
//! let ndcg = normalized_dcg(&[3.0, 2.0, 3.0, 0.0], 3, DcgMethod::Industry);
//! assert!(ndcg > 0.0 && ndcg < 1.0);
//!
//! let loss = ltv_error(&[120.0, 80.0], &[100.0, 90.0]).unwrap();
//! assert!(loss > 0.0);
//! ```

pub mod asymmetric;
pub mod config;
pub mod error;
pub mod ranking;

pub use asymmetric::{ltv_error, turnover_error, weighted_turnover_error};
pub use config::AsymmetryWeights;
pub use error::{MetricError, Result};
pub use ranking::{
    avg_ndcg, cumulative_gain, discounted_cumulative_gain, normalized_dcg, DcgMethod,
};
