//! Integration tests exercising the public API the way a caller would.
//!
//! Run with: `cargo test -p scorekit-core --test metrics_integration`

use scorekit_core::{
    avg_ndcg, cumulative_gain, discounted_cumulative_gain, ltv_error, normalized_dcg,
    turnover_error, weighted_turnover_error, AsymmetryWeights, DcgMethod, MetricError,
};
use std::thread;

// ============================================================================
// Fixtures
// ============================================================================

/// Per-query relevance in the order a search system returned results.
fn query_relevances() -> Vec<Vec<f64>> {
    vec![
        vec![3.0, 2.0, 3.0, 0.0, 1.0, 2.0],
        vec![0.0, 0.0, 1.0],
        vec![2.0, 2.0, 1.0, 0.0],
        vec![1.0],
        vec![0.0, 3.0, 0.0, 2.0, 1.0, 0.0, 0.0, 1.0],
    ]
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_method_from_config_tag() {
    // Callers holding a string tag convert once, at the boundary
    for (tag, expected) in [
        ("standard", DcgMethod::Standard),
        ("industry", DcgMethod::Industry),
    ] {
        let method: DcgMethod = tag.parse().unwrap();
        assert_eq!(method, expected);
        assert_eq!(method.to_string(), tag);
    }

    let err = "bogus".parse::<DcgMethod>().unwrap_err();
    assert_eq!(err, MetricError::UnknownMethod("bogus".to_string()));
}

#[test]
fn test_ranking_family_is_consistent() {
    let relevance = [3.0, 2.0, 3.0, 0.0, 1.0, 2.0];

    assert_eq!(cumulative_gain(&relevance, 3), 8.0);

    let dcg = discounted_cumulative_gain(&relevance, 3, DcgMethod::Standard);
    assert!(dcg < cumulative_gain(&relevance, 3));

    let mut ideal = relevance.to_vec();
    ideal.sort_by(|a, b| b.total_cmp(a));
    let idcg = discounted_cumulative_gain(&ideal, 3, DcgMethod::Standard);

    let ndcg = normalized_dcg(&relevance, 3, DcgMethod::Standard);
    assert!((ndcg - dcg / idcg).abs() < 1e-12);
}

#[test]
fn test_avg_ndcg_matches_manual_mean() {
    let queries = query_relevances();
    for method in [DcgMethod::Standard, DcgMethod::Industry] {
        for k in [1, 3, 5, 10] {
            let manual: f64 = queries
                .iter()
                .map(|q| normalized_dcg(q, k, method))
                .sum::<f64>()
                / queries.len() as f64;
            let score = avg_ndcg(&queries, k, method).unwrap();
            assert!(
                (score - manual).abs() < 1e-12,
                "k={} method={}: {} != {}",
                k,
                method,
                score,
                manual
            );
            assert!((0.0..=1.0).contains(&score));
        }
    }
}

#[test]
fn test_industry_rewards_top_heavy_rankings_more() {
    // Putting the single highly relevant item last hurts more with exponential gain
    let relevance = [1.0, 1.0, 1.0, 3.0];
    let standard = normalized_dcg(&relevance, 4, DcgMethod::Standard);
    let industry = normalized_dcg(&relevance, 4, DcgMethod::Industry);
    assert!(industry < standard, "industry={} standard={}", industry, standard);
}

// ============================================================================
// Asymmetric losses
// ============================================================================

#[test]
fn test_weights_from_json_config() {
    let weights: AsymmetryWeights =
        serde_json::from_str(r#"{"under": 2.0, "over": 0.5}"#).unwrap();
    weights.validate().unwrap();

    let y_true = [10.0, 20.0];
    let y_pred = [8.0, 25.0];
    let plain = turnover_error(&y_true, &y_pred).unwrap();
    let weighted = weighted_turnover_error(&y_true, &y_pred, weights).unwrap();
    assert!(weighted > plain);
}

#[test]
fn test_losses_report_misaligned_input() {
    let err = ltv_error(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Length mismatch: y_true has 3 elements, y_pred has 1"
    );
}

// ============================================================================
// Referential transparency
// ============================================================================

#[test]
fn test_concurrent_calls_agree() {
    let queries = query_relevances();
    let y_true = [12.0, 7.0, 30.0, 5.5];
    let y_pred = [10.0, 8.0, 33.0, 5.0];

    let baseline = (
        avg_ndcg(&queries, 5, DcgMethod::Industry).unwrap(),
        turnover_error(&y_true, &y_pred).unwrap(),
        ltv_error(&y_true, &y_pred).unwrap(),
    );

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (
                        avg_ndcg(&queries, 5, DcgMethod::Industry).unwrap(),
                        turnover_error(&y_true, &y_pred).unwrap(),
                        ltv_error(&y_true, &y_pred).unwrap(),
                    )
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.0.to_bits(), baseline.0.to_bits());
            assert_eq!(result.1.to_bits(), baseline.1.to_bits());
            assert_eq!(result.2.to_bits(), baseline.2.to_bits());
        }
    });

    // Inputs are untouched
    assert_eq!(queries, query_relevances());
}

#[test]
fn test_public_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DcgMethod>();
    assert_send_sync::<AsymmetryWeights>();
    assert_send_sync::<MetricError>();
}
