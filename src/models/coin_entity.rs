use serde::{Deserialize, Serialize};

/// One element of the `/v1/coins` response, named exactly as the remote API sends it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CoinEntity {
    pub id: String,
    pub is_active: bool,
    pub is_new: bool,
    pub name: String,
    pub rank: i32,
    pub symbol: String,
    #[serde(rename = "type")]
    pub coin_type: String,
}
