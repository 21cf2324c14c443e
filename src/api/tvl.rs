use super::FeedClient;
use crate::error::Result;
use crate::models::TvlPoint;

impl FeedClient {
    /// Daily chain-level TVL history, ascending by date. The upstream feed
    /// emits one point per day with the most recent observation last.
    pub(crate) async fn fetch_chain_tvl_history(&self) -> Result<Vec<TvlPoint>> {
        let url = format!(
            "{}/v2/historicalChainTvl/{}",
            self.upstream().api_url,
            self.network().tvl_slug
        );
        self.get_json(&url).await
    }
}
