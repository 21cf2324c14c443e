use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Single-token price snapshot from coins.llama.fi `/prices/current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPrice {
    pub symbol: String,
    pub price: f64,
    pub decimals: u8,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TokenPrice {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::UpstreamShape("empty token symbol".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::UpstreamShape(format!(
                "invalid token price: {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// Envelope of `/prices/current/{chain}:{address}`: one entry per requested
/// token, keyed by the `{chain}:{address}` identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    pub coins: HashMap<String, TokenPrice>,
}

/// One daily observation of chain-level TVL history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TvlPoint {
    pub date: i64,
    pub tvl: f64,
}

/// Raw protocol metadata from api.llama.fi `/protocol/{slug}`. Only the
/// fields the metric engine consumes are kept; the endpoint returns far more.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolData {
    pub name: String,
    #[serde(default)]
    pub chains: Vec<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<HashMap<String, String>>,
    #[serde(default)]
    pub gecko_id: Option<String>,
    #[serde(default, rename = "cmcId")]
    pub cmc_id: Option<String>,
    #[serde(default, rename = "currentChainTvls")]
    pub current_chain_tvls: HashMap<String, f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PeggedValue {
    #[serde(default, rename = "peggedUSD")]
    pub pegged_usd: f64,
}

/// One daily observation of bridged stablecoin circulation on one chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StablecoinPoint {
    pub date: String,
    #[serde(default, rename = "totalBridgedToUSD")]
    pub total_bridged_to_usd: PeggedValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_response_parses_dynamic_key() {
        let body = r#"{
            "coins": {
                "mantle:0xdeaddeaddeaddeaddeaddeaddeaddeaddead1111": {
                    "decimals": 18,
                    "symbol": "WMNT",
                    "price": 0.61,
                    "timestamp": 1717000000,
                    "confidence": 0.99
                }
            }
        }"#;
        let parsed: PriceResponse = serde_json::from_str(body).unwrap();
        let price = &parsed.coins["mantle:0xdeaddeaddeaddeaddeaddeaddeaddeaddead1111"];
        assert_eq!(price.symbol, "WMNT");
        assert_eq!(price.decimals, 18);
        assert_eq!(price.confidence, Some(0.99));
        price.validate().unwrap();
    }

    #[test]
    fn token_price_rejects_negative_price() {
        let price = TokenPrice {
            symbol: "BAD".into(),
            price: -1.0,
            decimals: 18,
            timestamp: 0,
            confidence: None,
        };
        assert!(price.validate().is_err());
    }

    #[test]
    fn protocol_data_tolerates_missing_optionals() {
        let body = r#"{"name": "Bare Protocol", "chains": ["Mantle"], "currentChainTvls": {"Mantle": 12.5}}"#;
        let parsed: ProtocolData = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "Bare Protocol");
        assert!(parsed.twitter.is_none());
        assert!(parsed.gecko_id.is_none());
        assert_eq!(parsed.current_chain_tvls["Mantle"], 12.5);
    }

    #[test]
    fn stablecoin_point_defaults_missing_bridged_value() {
        let body = r#"{"date": "1717000000"}"#;
        let parsed: StablecoinPoint = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total_bridged_to_usd.pegged_usd, 0.0);
    }
}
