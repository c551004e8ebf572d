use serde::{Deserialize, Serialize};
pub mod coin_entity;
pub mod outcome;

pub use coin_entity::CoinEntity;
pub use outcome::{Outcome, UNEXPECTED_ERROR};

/// Display-ready coin, produced from a [`CoinEntity`] by the mapper.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub is_active: bool,
    pub is_new: bool,
    pub rank: i32,
    pub coin_type: String,
}

pub type CoinList = Outcome<Vec<Coin>>;
