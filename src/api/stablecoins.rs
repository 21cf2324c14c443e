use super::FeedClient;
use crate::error::Result;
use crate::models::StablecoinPoint;

impl FeedClient {
    /// Bridged circulation history for one tracked stablecoin id on the
    /// target chain, ascending by date.
    pub(crate) async fn fetch_stablecoin_history(
        &self,
        stablecoin_id: u32,
    ) -> Result<Vec<StablecoinPoint>> {
        let url = format!(
            "{}/stablecoincharts/{}?stablecoin={}",
            self.upstream().stablecoins_url,
            self.network().chain_name,
            stablecoin_id
        );
        self.get_json(&url).await
    }
}
