use crate::models::Coin;
use crate::utils::{CoinApi, CoinMapper, FetchError, Mapper};
use std::sync::Arc;

pub struct CoinRepository {
    api: Arc<dyn CoinApi>,
    mapper: CoinMapper,
}

impl CoinRepository {
    pub fn new(api: Arc<dyn CoinApi>, mapper: CoinMapper) -> Self {
        Self { api, mapper }
    }

    /// Fetches the remote list and maps it record by record, keeping the
    /// response order.
    pub async fn get_coins(&self) -> Result<Vec<Coin>, FetchError> {
        let entities = self.api.get_coins().await?;
        Ok(entities
            .into_iter()
            .map(|entity| self.mapper.to_domain(entity))
            .collect())
    }
}
