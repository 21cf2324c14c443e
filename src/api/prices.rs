use super::FeedClient;
use crate::error::Result;
use crate::models::{PriceResponse, TokenPrice};
use crate::normalize;

impl FeedClient {
    /// Current price snapshot for one token contract on the target network.
    pub(crate) async fn fetch_token_price(&self, contract_address: &str) -> Result<TokenPrice> {
        let identifier = format!("{}:{}", self.network().price_prefix, contract_address);
        let url = format!("{}/prices/current/{}", self.upstream().coins_url, identifier);

        let response: PriceResponse = self.get_json(&url).await?;
        let price = normalize::project_price(response, &identifier)?;
        price.validate()?;
        Ok(price)
    }
}
