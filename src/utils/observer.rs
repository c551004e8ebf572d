use crate::holder::CoinListSubscription;
use crate::models::{CoinList, Outcome};
use tracing::{info, warn};

/// Reports every state the subscription goes through until the holder stops
/// publishing. Returns how many states were reported.
pub async fn start_log_observer(mut subscription: CoinListSubscription) -> usize {
    log_state(&subscription.current());
    let mut reported = 1;
    while let Some(state) = subscription.changed().await {
        log_state(&state);
        reported += 1;
    }
    reported
}

pub fn log_state(state: &CoinList) {
    match state {
        Outcome::Loading => info!("Loading coins.."),
        Outcome::Success { data } => {
            info!(count = data.len(), "Coin list ready");
            for coin in data.iter().take(10) {
                info!(
                    rank = coin.rank,
                    symbol = %coin.symbol,
                    kind = %coin.coin_type,
                    "{}",
                    coin.name
                );
            }
        }
        Outcome::Error { message } => warn!("Could not load coins: {}", message),
    }
}
