//! Tool registry: the boundary between the metric engine and the dispatch
//! layer. Every handler runs one fetch-normalize-compute chain and renders
//! a single text block; no derived logic lives in the rendering.

use log::info;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::FeedProvider;
use crate::config::Config;
use crate::engine::{ProtocolSummary, TrendSummary};
use crate::error::{Error, Result};
use crate::normalize;

/// Externally visible description of one operation, in the shape the
/// `tools/list` response expects.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Clone)]
enum Action {
    TokenPrice,
    TvlReport,
    ProtocolSummary { slug: String },
    StablecoinTvl { id: u32, symbol: String },
}

#[derive(Debug, Clone)]
struct Tool {
    def: ToolDef,
    action: Action,
}

fn empty_schema() -> Value {
    json!({ "type": "object", "properties": {} })
}

#[derive(Debug, Clone)]
pub struct ToolRegistry {
    chain_name: String,
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn from_config(config: &Config) -> Self {
        let chain = &config.network.chain_name;
        let mut tools = vec![
            Tool {
                def: ToolDef {
                    name: "get-token-price".to_string(),
                    description: format!(
                        "Get the price of a token in {} network",
                        config.network.price_prefix
                    ),
                    input_schema: json!({
                        "type": "object",
                        "properties": {
                            "contract_address": { "type": "string" }
                        },
                        "required": ["contract_address"]
                    }),
                },
                action: Action::TokenPrice,
            },
            Tool {
                def: ToolDef {
                    name: "get-ltv".to_string(),
                    description: format!("Get the total value locked of {} network", chain),
                    input_schema: empty_schema(),
                },
                action: Action::TvlReport,
            },
        ];

        for protocol in &config.protocols {
            tools.push(Tool {
                def: ToolDef {
                    name: format!("get-{}-summary", protocol.slug),
                    description: format!(
                        "Get a health summary of the {} protocol on {}",
                        protocol.slug, chain
                    ),
                    input_schema: empty_schema(),
                },
                action: Action::ProtocolSummary {
                    slug: protocol.slug.clone(),
                },
            });
        }

        for stablecoin in &config.stablecoins {
            tools.push(Tool {
                def: ToolDef {
                    name: format!("get-{}-tvl", stablecoin.symbol.to_lowercase()),
                    description: format!(
                        "Get the bridged {} circulation on {}",
                        stablecoin.symbol, chain
                    ),
                    input_schema: empty_schema(),
                },
                action: Action::StablecoinTvl {
                    id: stablecoin.id,
                    symbol: stablecoin.symbol.clone(),
                },
            });
        }

        Self {
            chain_name: chain.clone(),
            tools,
        }
    }

    pub fn definitions(&self) -> Vec<&ToolDef> {
        self.tools.iter().map(|t| &t.def).collect()
    }

    /// Run one tool invocation against the feed provider and render its
    /// text block. Feed and normalizer errors propagate unchanged; the
    /// dispatch layer decides how a failed invocation is surfaced.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: &Value,
        feeds: &dyn FeedProvider,
    ) -> Result<String> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.def.name == name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        info!("invoking tool {}", name);

        match &tool.action {
            Action::TokenPrice => {
                let contract_address = arguments
                    .get("contract_address")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        Error::Protocol("get-token-price requires contract_address".to_string())
                    })?;
                let price = feeds.token_price(contract_address).await?;
                Ok(format!("Price of {}: {}", price.symbol, price.price))
            }
            Action::TvlReport => {
                let history = feeds.chain_tvl_history().await?;
                let series: Vec<f64> = history.iter().map(|point| point.tvl).collect();
                let trend = TrendSummary::from_series(&series)?;
                Ok(format!(
                    "{} TVL: ${:.2}\n24h change: {:.2}%\n7d change: {:.2}%",
                    self.chain_name, trend.current, trend.change_1d, trend.change_7d
                ))
            }
            Action::ProtocolSummary { slug } => {
                let raw = feeds.protocol(slug).await?;
                let record = normalize::narrow_protocol(raw, &self.chain_name);
                let summary = ProtocolSummary::derive(&record);
                let presence = if summary.is_multi_chain {
                    "multi-chain"
                } else {
                    "single-chain"
                };
                Ok(format!(
                    "{} {}: {} health ({}/100)\nTVL on {}: ${:.2}\nSocial platforms: {}\nChain presence: {}\n{} share: {}%",
                    summary.health.category.glyph(),
                    summary.name,
                    summary.health.category.label(),
                    summary.health.score,
                    self.chain_name,
                    summary.tvl,
                    summary.social.platform_count,
                    presence,
                    self.chain_name,
                    summary.network_share
                ))
            }
            Action::StablecoinTvl { id, symbol } => {
                let history = feeds.stablecoin_history(*id).await?;
                let latest = history.last().ok_or_else(|| {
                    Error::Derivation(format!("empty circulation history for stablecoin {}", id))
                })?;
                Ok(format!(
                    "{} TVL: ${:.2}",
                    symbol, latest.total_bridged_to_usd.pegged_usd
                ))
            }
        }
    }
}
