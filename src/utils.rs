pub mod coinpaprika;
pub mod mapper;
pub mod observer;

pub use coinpaprika::{CoinApi, CoinPaprika, FetchError};
pub use mapper::{CoinMapper, Mapper};
