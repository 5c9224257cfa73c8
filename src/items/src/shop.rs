// src/items/src/shop.rs

use thiserror::Error;
use tracing::info;

use crate::Item;

#[derive(Debug, Error, PartialEq)]
pub enum ShopError {
    #[error("No item at catalog index {index} (catalog has {len})")]
    NoSuchItem { index: usize, len: usize },
    #[error("You don't have enough gold! ({gold}g, need {cost}g)")]
    InsufficientGold { cost: u32, gold: u32 },
}

/// 能在商店购物的角色
pub trait Customer {
    /// 当前金币
    fn gold(&self) -> u32;

    /// 买下物品：金币不足时不做任何修改
    fn buy(&mut self, item: &Item) -> Result<(), ShopError>;
}

/// 商店：目录在创建后固定，每件商品无限供应
#[derive(Debug, Clone, Default)]
pub struct Shop {
    catalog: Vec<Item>,
}

impl Shop {
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }

    pub fn items(&self) -> &[Item] {
        &self.catalog
    }

    /// Sells the catalog entry at `index` to `buyer`. The catalog is never
    /// depleted; only the buyer changes.
    pub fn sell<C: Customer>(&self, buyer: &mut C, index: usize) -> Result<&Item, ShopError> {
        let item = self.catalog.get(index).ok_or(ShopError::NoSuchItem {
            index,
            len: self.catalog.len(),
        })?;

        buyer.buy(item)?;
        info!(item = %item.name, cost = item.cost, gold_left = buyer.gold(), "item sold");
        Ok(item)
    }
}
