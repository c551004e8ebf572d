use crate::models::CoinEntity;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const COINS_PATH: &str = "/v1/coins";

/// Any failure while obtaining the coin list. The display text is what
/// observers end up seeing, so every variant prints its cause verbatim.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] ReqwestError),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
    #[error("")]
    Unspecified,
}

/// Source of raw coin records.
#[async_trait]
pub trait CoinApi: Send + Sync {
    async fn get_coins(&self) -> Result<Vec<CoinEntity>, FetchError>;
}

pub struct CoinPaprika {
    client: Client,
    coins_url: String,
}

impl CoinPaprika {
    pub fn init(base_url: &Url, timeout: Duration) -> Result<Self, ReqwestError> {
        let client = Client::builder().timeout(timeout).build()?;
        let coins_url = format!("{}{}", base_url.as_str().trim_end_matches('/'), COINS_PATH);

        Ok(Self { client, coins_url })
    }

    pub fn coins_url(&self) -> &str {
        &self.coins_url
    }
}

#[async_trait]
impl CoinApi for CoinPaprika {
    async fn get_coins(&self) -> Result<Vec<CoinEntity>, FetchError> {
        debug!(url = %self.coins_url, "requesting coin list");
        let response = self
            .client
            .get(&self.coins_url)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let coins = serde_json::from_str::<Vec<CoinEntity>>(&text)?;

        Ok(coins)
    }
}
