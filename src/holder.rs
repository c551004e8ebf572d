use crate::fetcher::GetCoins;
use crate::models::{CoinList, Outcome};
use futures_util::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Keeps the latest coin list state and relays it to subscribers.
///
/// Creating a holder starts the one and only fetch it will ever run; it must
/// be created inside a tokio runtime. Dropping it stops the fetch task, after
/// which subscribers see no further updates.
pub struct CoinListHolder {
    state: watch::Receiver<CoinList>,
    task: JoinHandle<()>,
}

impl CoinListHolder {
    pub fn new(use_case: &GetCoins) -> Self {
        let (sender, state) = watch::channel(Outcome::Loading);
        let updates = use_case.invoke();

        let task = tokio::spawn(async move {
            let mut updates = Box::pin(updates);
            while let Some(next) = updates.next().await {
                debug!(?next, "Coin list state");
                sender.send_if_modified(|current| {
                    if *current == next {
                        false
                    } else {
                        *current = next;
                        true
                    }
                });
            }
        });

        Self { state, task }
    }

    /// The returned subscription has already seen the retained state, so its
    /// first `changed()` waits for a newer one.
    pub fn subscribe(&self) -> CoinListSubscription {
        let mut state = self.state.clone();
        state.borrow_and_update();
        CoinListSubscription { state }
    }

    pub fn current(&self) -> CoinList {
        self.state.borrow().clone()
    }
}

impl Drop for CoinListHolder {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Read-only view onto a [`CoinListHolder`].
#[derive(Clone)]
pub struct CoinListSubscription {
    state: watch::Receiver<CoinList>,
}

impl CoinListSubscription {
    /// The retained state at the time of the call.
    pub fn current(&self) -> CoinList {
        self.state.borrow().clone()
    }

    /// Waits for the next state. `None` once the holder will publish nothing
    /// more.
    pub async fn changed(&mut self) -> Option<CoinList> {
        self.state.changed().await.ok()?;
        Some(self.state.borrow_and_update().clone())
    }

    /// Resolves with the terminal state, or with whatever was retained if the
    /// holder went away first.
    pub async fn wait_for_terminal(&mut self) -> CoinList {
        if let Ok(state) = self.state.wait_for(Outcome::is_terminal).await {
            return state.clone();
        }
        self.state.borrow().clone()
    }
}
