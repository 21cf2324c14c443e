use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub upstream: UpstreamConfig,
    #[serde(default = "default_protocols")]
    pub protocols: Vec<ProtocolConfig>,
    #[serde(default = "default_stablecoins")]
    pub stablecoins: Vec<StablecoinConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    /// Optional log file; stderr is used when unset so stdout stays free for
    /// the tool transport.
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Chain prefix in price identifiers, e.g. `mantle` in `mantle:0x..`.
    pub price_prefix: String,
    /// Path segment of the chain TVL history endpoint.
    pub tvl_slug: String,
    /// Chain name as it appears in per-chain TVL maps and chart paths.
    pub chain_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub coins_url: String,
    pub api_url: String,
    pub stablecoins_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProtocolConfig {
    /// DeFiLlama protocol slug, e.g. `merchant-moe`.
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StablecoinConfig {
    /// DeFiLlama stablecoin chart id.
    pub id: u32,
    pub symbol: String,
}

fn default_protocols() -> Vec<ProtocolConfig> {
    vec![
        ProtocolConfig {
            slug: "merchant-moe".to_string(),
        },
        ProtocolConfig {
            slug: "treehouse-protocol".to_string(),
        },
    ]
}

fn default_stablecoins() -> Vec<StablecoinConfig> {
    vec![StablecoinConfig {
        id: 1,
        symbol: "USDT".to_string(),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mantle-onchain-context".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_file: None,
            },
            network: NetworkConfig {
                price_prefix: "mantle".to_string(),
                tvl_slug: "mantle".to_string(),
                chain_name: "Mantle".to_string(),
            },
            upstream: UpstreamConfig {
                coins_url: "https://coins.llama.fi".to_string(),
                api_url: "https://api.llama.fi".to_string(),
                stablecoins_url: "https://stablecoins.llama.fi".to_string(),
                request_timeout_secs: 10,
            },
            protocols: default_protocols(),
            stablecoins: default_stablecoins(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_mantle() {
        let config = Config::default();
        assert_eq!(config.network.chain_name, "Mantle");
        assert_eq!(config.network.price_prefix, "mantle");
        assert_eq!(config.upstream.request_timeout_secs, 10);
        assert_eq!(config.protocols.len(), 2);
        assert_eq!(config.stablecoins[0].symbol, "USDT");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let reloaded: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(reloaded.network.chain_name, config.network.chain_name);
        assert_eq!(reloaded.protocols.len(), config.protocols.len());
        assert_eq!(reloaded.stablecoins[0].id, config.stablecoins[0].id);
    }

    #[test]
    fn partial_config_fills_protocol_defaults() {
        let body = r#"
            [server]
            name = "test-context"
            version = "0.0.1"

            [network]
            price_prefix = "mantle"
            tvl_slug = "mantle"
            chain_name = "Mantle"

            [upstream]
            coins_url = "http://localhost:1"
            api_url = "http://localhost:2"
            stablecoins_url = "http://localhost:3"
            request_timeout_secs = 2
        "#;
        let config: Config = toml::from_str(body).unwrap();
        assert_eq!(config.protocols.len(), 2);
        assert_eq!(config.protocols[0].slug, "merchant-moe");
        assert_eq!(config.stablecoins[0].id, 1);
    }
}
