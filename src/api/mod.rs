use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{NetworkConfig, UpstreamConfig};
use crate::error::{Error, Result};
use crate::metrics;
use crate::models::{ProtocolData, StablecoinPoint, TokenPrice, TvlPoint};

pub mod prices;
pub mod protocols;
pub mod stablecoins;
pub mod tvl;

/// Upstream feed surface consumed by the tool layer. One method per feed;
/// each call performs exactly one HTTP GET and returns a typed record. No
/// retry and no caching: a failed fetch fails the whole invocation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedProvider: Send + Sync {
    async fn token_price(&self, contract_address: &str) -> Result<TokenPrice>;
    async fn chain_tvl_history(&self) -> Result<Vec<TvlPoint>>;
    async fn protocol(&self, slug: &str) -> Result<ProtocolData>;
    async fn stablecoin_history(&self, stablecoin_id: u32) -> Result<Vec<StablecoinPoint>>;
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    network: NetworkConfig,
    upstream: UpstreamConfig,
}

impl FeedClient {
    pub fn new(network: NetworkConfig, upstream: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(upstream.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            network,
            upstream,
        })
    }

    pub(crate) fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub(crate) fn upstream(&self) -> &UpstreamConfig {
        &self.upstream
    }

    /// One GET against `url`, decoded as `T`. Non-2xx maps to
    /// `UpstreamHttp`; an undecodable body maps to `UpstreamShape`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        metrics::FEED_REQUESTS.inc();
        let _timer = metrics::FEED_LATENCY.start_timer();
        info!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::FEED_ERRORS.inc();
                error!("request to {} failed: {}", url, e);
                return Err(Error::from(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            metrics::FEED_ERRORS.inc();
            error!("upstream {} answered {}", url, status);
            return Err(Error::UpstreamHttp {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            metrics::FEED_ERRORS.inc();
            error!("failed to decode body from {}: {}", url, e);
            Error::UpstreamShape(format!("failed to decode {}: {}", url, e))
        })
    }
}


#[async_trait]
impl FeedProvider for FeedClient {
    async fn token_price(&self, contract_address: &str) -> Result<TokenPrice> {
        self.fetch_token_price(contract_address).await
    }

    async fn chain_tvl_history(&self) -> Result<Vec<TvlPoint>> {
        self.fetch_chain_tvl_history().await
    }

    async fn protocol(&self, slug: &str) -> Result<ProtocolData> {
        self.fetch_protocol(slug).await
    }

    async fn stablecoin_history(&self, stablecoin_id: u32) -> Result<Vec<StablecoinPoint>> {
        self.fetch_stablecoin_history(stablecoin_id).await
    }
}
