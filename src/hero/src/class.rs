// src/hero/src/class.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use items::{Item, ItemType, Shop};

/// 英雄职业枚举
///
/// The variant name is the job label written to save files and parsed back
/// on load, so renaming a variant breaks existing saves.
#[derive(
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
pub enum Class {
    #[default]
    Wizard, // 法师（低生命值，高攻击）
    Knight, // 骑士（高生命值，高防御）
    Hunter, // 猎人（均衡）
}

impl Class {
    /// 职业标签（存档中使用）
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// 职业基础属性：(生命, 攻击, 防御)
    pub fn base_stats(&self) -> (f32, f32, f32) {
        match self {
            Class::Wizard => (50.0, 35.0, 10.0),
            Class::Knight => (100.0, 25.0, 25.0),
            Class::Hunter => (75.0, 30.0, 15.0),
        }
    }

    /// 该职业在商店里能买到的物品
    pub fn shop_stock(&self) -> Vec<Item> {
        match self {
            Class::Wizard => vec![
                Item::new("Big Wand", 40, 15.0, ItemType::Attack),
                Item::new("Big Shield", 30, 15.0, ItemType::Defense),
            ],
            Class::Knight => vec![
                Item::new("Long Sword", 35, 20.0, ItemType::Attack),
                Item::new("Shoes", 15, 10.0, ItemType::Health),
            ],
            Class::Hunter => vec![
                Item::new("Bow", 30, 12.0, ItemType::Attack),
                Item::new("Shield", 20, 15.0, ItemType::Defense),
            ],
        }
    }

    pub fn shop(&self) -> Shop {
        Shop::new(self.shop_stock())
    }

    /// 按名称查找本职业商店中的物品
    pub fn stocked_item(&self, name: &str) -> Option<Item> {
        self.shop_stock().into_iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_parse_back_to_the_same_class() {
        for class in Class::iter() {
            assert_eq!(Class::from_str(class.label()), Ok(class));
        }
        assert!(Class::from_str("Bard").is_err());
        assert!(Class::from_str("hunter").is_err());
    }

    #[test]
    fn stocked_item_lookup() {
        let shield = Class::Hunter.stocked_item("Shield").expect("hunter sells shields");
        assert_eq!(shield, Item::new("Shield", 20, 15.0, ItemType::Defense));
        assert!(Class::Wizard.stocked_item("Shield").is_none());
    }
}
