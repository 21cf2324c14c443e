use super::FeedClient;
use crate::error::Result;
use crate::models::ProtocolData;

impl FeedClient {
    /// Raw protocol metadata by DeFiLlama slug. Narrowing to the target
    /// chain is the normalizer's job, not the fetcher's.
    pub(crate) async fn fetch_protocol(&self, slug: &str) -> Result<ProtocolData> {
        let url = format!("{}/protocol/{}", self.upstream().api_url, slug);
        self.get_json(&url).await
    }
}
