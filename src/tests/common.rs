use std::collections::HashMap;

use crate::config::Config;
use crate::models::{ProtocolData, ProtocolRecord, TvlPoint};
use crate::normalize;

/// Default config pointed at unroutable upstreams, so a test that reaches
/// the network by accident fails fast.
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.upstream.coins_url = "http://127.0.0.1:1".to_string();
    config.upstream.api_url = "http://127.0.0.1:1".to_string();
    config.upstream.stablecoins_url = "http://127.0.0.1:1".to_string();
    config.upstream.request_timeout_secs = 1;
    config
}

/// Daily TVL series from bare values, one point per day ascending.
pub fn tvl_series(tvls: &[f64]) -> Vec<TvlPoint> {
    tvls.iter()
        .enumerate()
        .map(|(i, tvl)| TvlPoint {
            date: 1_717_000_000 + i as i64 * 86_400,
            tvl: *tvl,
        })
        .collect()
}

/// Protocol record on Mantle with every identity signal present.
pub fn full_signal_record(target_tvl: f64, total_tvl: f64) -> ProtocolRecord {
    let mut github = HashMap::new();
    github.insert("org".to_string(), "example".to_string());
    let raw = ProtocolData {
        name: "Example Protocol".to_string(),
        chains: vec!["Mantle".to_string(), "Ethereum".to_string()],
        twitter: Some("example".to_string()),
        github: Some(github),
        gecko_id: Some("example".to_string()),
        cmc_id: Some("42".to_string()),
        current_chain_tvls: [
            ("Mantle".to_string(), target_tvl),
            ("Ethereum".to_string(), total_tvl - target_tvl),
        ]
        .into_iter()
        .collect(),
    };
    normalize::narrow_protocol(raw, "Mantle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{platform_strength, HealthCategory, ProtocolSummary};

    #[test]
    fn full_signal_fixture_scores_one_hundred() {
        let record = full_signal_record(600_000.0, 1_000_000.0);
        assert_eq!(platform_strength(&record), 100);
        let summary = ProtocolSummary::derive(&record);
        assert_eq!(summary.health.category, HealthCategory::High);
        assert_eq!(summary.network_share, 60);
    }

    #[test]
    fn tvl_series_fixture_is_daily_and_ascending() {
        let series = tvl_series(&[1.0, 2.0, 3.0]);
        assert_eq!(series.len(), 3);
        assert!(series.windows(2).all(|w| w[1].date - w[0].date == 86_400));
    }
}
