use crate::models::{CoinList, Outcome};
use crate::repository::CoinRepository;
use futures_util::{future, stream, Stream, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

/// Single-shot coin list fetch expressed as a stream of states.
#[derive(Clone)]
pub struct GetCoins {
    repository: Arc<CoinRepository>,
}

impl GetCoins {
    pub fn new(repository: CoinRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Yields `Loading`, then exactly one of `Success` or `Error`.
    ///
    /// Nothing is requested until the stream is polled past its first item.
    /// Failures never escape: they are turned into `Error` with the failure's
    /// text, or the generic message when it has none.
    pub fn invoke(&self) -> impl Stream<Item = CoinList> + Send + 'static {
        let repository = Arc::clone(&self.repository);
        let fetch = async move {
            info!("Fetching coin list");
            match repository.get_coins().await {
                Ok(coins) => {
                    info!(count = coins.len(), "Fetched coin list");
                    Outcome::success(coins)
                }
                Err(err) => {
                    warn!(error = ?err, "Coin list fetch failed");
                    Outcome::error(err.to_string())
                }
            }
        };

        stream::once(future::ready(CoinList::Loading)).chain(stream::once(fetch))
    }
}
