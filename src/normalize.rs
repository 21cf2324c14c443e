//! Narrowing of multi-network upstream shapes to the single target network.
//!
//! Two distinct absence policies live here. A chain missing from a per-chain
//! TVL map means the protocol is not deployed there, so the slice defaults
//! to zero. A token missing from a price response means the feed did not
//! answer the question we asked, which is a shape error.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{PriceResponse, ProtocolData, ProtocolRecord, TokenPrice};

/// Restrict a raw protocol record to `target_chain`. The returned record's
/// `chain_tvl` holds exactly the target chain's entry; when the chain is
/// absent upstream the entry is an explicit 0.0 ("not deployed here"), never
/// an error.
pub fn narrow_protocol(raw: ProtocolData, target_chain: &str) -> ProtocolRecord {
    let total_tvl: f64 = raw.current_chain_tvls.values().sum();
    let target_tvl = match raw.current_chain_tvls.get(target_chain) {
        Some(tvl) => *tvl,
        // Not deployed on the target chain: an explicit zero slice.
        None => 0.0,
    };

    let mut chain_tvl = HashMap::with_capacity(1);
    chain_tvl.insert(target_chain.to_string(), target_tvl);

    ProtocolRecord {
        name: raw.name,
        chains: raw.chains,
        twitter: raw.twitter,
        github: raw.github,
        gecko_id: raw.gecko_id,
        cmc_id: raw.cmc_id,
        chain_tvl,
        total_tvl,
    }
}

/// Project the one requested token out of a price response. The response is
/// keyed by `{chain}:{address}`; a missing key means the upstream did not
/// price the token we asked for.
pub fn project_price(response: PriceResponse, identifier: &str) -> Result<TokenPrice> {
    response
        .coins
        .get(identifier)
        .cloned()
        .ok_or_else(|| Error::UpstreamShape(format!("no price entry for {}", identifier)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_protocol(chain_tvls: &[(&str, f64)]) -> ProtocolData {
        ProtocolData {
            name: "Test Protocol".to_string(),
            chains: chain_tvls.iter().map(|(c, _)| c.to_string()).collect(),
            twitter: None,
            github: None,
            gecko_id: None,
            cmc_id: None,
            current_chain_tvls: chain_tvls
                .iter()
                .map(|(c, v)| (c.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn narrow_keeps_only_target_chain() {
        let raw = raw_protocol(&[("Mantle", 250_000.0), ("Ethereum", 750_000.0)]);
        let record = narrow_protocol(raw, "Mantle");
        assert_eq!(record.chain_tvl.len(), 1);
        assert_eq!(record.chain_tvl["Mantle"], 250_000.0);
        assert_eq!(record.target_tvl(), 250_000.0);
        assert_eq!(record.total_tvl, 1_000_000.0);
    }

    #[test]
    fn narrow_defaults_to_zero_when_chain_absent() {
        let raw = raw_protocol(&[("Ethereum", 500_000.0)]);
        let record = narrow_protocol(raw, "Mantle");
        assert_eq!(record.chain_tvl["Mantle"], 0.0);
        assert_eq!(record.target_tvl(), 0.0);
        assert_eq!(record.total_tvl, 500_000.0);
    }

    #[test]
    fn narrow_handles_empty_chain_map() {
        let record = narrow_protocol(raw_protocol(&[]), "Mantle");
        assert_eq!(record.target_tvl(), 0.0);
        assert_eq!(record.total_tvl, 0.0);
    }

    #[test]
    fn project_price_rejects_missing_identifier() {
        let response: PriceResponse =
            serde_json::from_str(r#"{"coins": {}}"#).unwrap();
        let err = project_price(response, "mantle:0xabc").unwrap_err();
        assert!(matches!(err, Error::UpstreamShape(_)));
    }

    #[test]
    fn project_price_returns_requested_entry() {
        let body = r#"{"coins": {"mantle:0xabc": {
            "decimals": 6, "symbol": "USDC", "price": 1.0, "timestamp": 1717000000
        }}}"#;
        let response: PriceResponse = serde_json::from_str(body).unwrap();
        let price = project_price(response, "mantle:0xabc").unwrap();
        assert_eq!(price.symbol, "USDC");
        assert_eq!(price.price, 1.0);
    }
}
