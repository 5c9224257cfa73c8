//src/items/src/lib.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use crate::shop::{Customer, Shop, ShopError};

pub mod shop;

/// Name shown for an empty equip slot.
pub const NOTHING: &str = "Nothing";

/// 基础物品结构（创建后不可变）
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub cost: u32,
    pub stat_boost: f32,
    pub kind: ItemType,
}

/// 物品加成的属性类别
#[derive(Debug, Display, Clone, Copy, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[strum(serialize = "ATTACK")]
    Attack,
    #[strum(serialize = "DEFENSE")]
    Defense,
    #[strum(serialize = "HEALTH")]
    Health,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: u32, stat_boost: f32, kind: ItemType) -> Self {
        Self {
            name: name.into(),
            cost,
            stat_boost,
            kind,
        }
    }

    /// 对指定属性的加成（类型不匹配时为0）
    pub fn boost_for(&self, kind: ItemType) -> f32 {
        if self.kind == kind { self.stat_boost } else { 0.0 }
    }

    /// Same item, priced differently. Used when a save file carries its own cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}g, +{} {})",
            self.name, self.cost, self.stat_boost, self.kind
        )
    }
}
