use crate::models::{Coin, CoinEntity};

/// Structural conversion between a wire record `E` and a domain record `M`.
pub trait Mapper<E, M> {
    fn to_domain(&self, entity: E) -> M;
    fn to_wire(&self, model: M) -> E;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoinMapper;

impl Mapper<CoinEntity, Coin> for CoinMapper {
    fn to_domain(&self, entity: CoinEntity) -> Coin {
        Coin {
            id: entity.id,
            name: entity.name,
            symbol: entity.symbol,
            is_active: entity.is_active,
            is_new: entity.is_new,
            rank: entity.rank,
            coin_type: entity.coin_type,
        }
    }

    fn to_wire(&self, model: Coin) -> CoinEntity {
        CoinEntity {
            id: model.id,
            is_active: model.is_active,
            is_new: model.is_new,
            name: model.name,
            rank: model.rank,
            symbol: model.symbol,
            coin_type: model.coin_type,
        }
    }
}
