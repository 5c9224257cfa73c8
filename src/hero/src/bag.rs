// src/hero/src/bag.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use items::{Item, ItemType, NOTHING};

#[derive(Debug, Error, PartialEq)]
pub enum EquipError {
    #[error("无效的物品索引: {index} (背包共{len}件)")]
    InvalidIndex { index: usize, len: usize },
    #[error("没有装备任何物品")]
    NothingEquipped,
}

/// 背包：按购买顺序存放物品，外加一个装备位
///
/// Equipping an item leaves it listed in the bag; the slot only remembers
/// its index. Items are never removed, so the index stays valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BagData")]
pub struct Bag {
    items: Vec<Item>,
    equipped: Option<usize>,
}

/// 反序列化的原始数据，经 `Bag::from_parts` 校验后才成为背包
#[derive(Deserialize)]
struct BagData {
    items: Vec<Item>,
    equipped: Option<usize>,
}

impl TryFrom<BagData> for Bag {
    type Error = EquipError;

    fn try_from(data: BagData) -> Result<Self, Self::Error> {
        Bag::from_parts(data.items, data.equipped)
    }
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从存档数据重建背包
    pub fn from_parts(items: Vec<Item>, equipped: Option<usize>) -> Result<Self, EquipError> {
        if let Some(index) = equipped {
            if index >= items.len() {
                return Err(EquipError::InvalidIndex {
                    index,
                    len: items.len(),
                });
            }
        }
        Ok(Self { items, equipped })
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 物品名称列表（供菜单显示）
    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn equip(&mut self, index: usize) -> Result<&Item, EquipError> {
        if index >= self.items.len() {
            return Err(EquipError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        self.equipped = Some(index);
        Ok(&self.items[index])
    }

    /// 卸下装备，返回被卸下的物品
    pub fn unequip(&mut self) -> Result<&Item, EquipError> {
        let index = self.equipped.take().ok_or(EquipError::NothingEquipped)?;
        self.items.get(index).ok_or(EquipError::NothingEquipped)
    }

    pub fn equipped(&self) -> Option<&Item> {
        self.equipped.and_then(|index| self.items.get(index))
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    /// 当前装备名称，空装备位显示为 "Nothing"
    pub fn equipped_name(&self) -> &str {
        self.equipped().map_or(NOTHING, |item| item.name.as_str())
    }

    /// 装备对指定属性的加成
    pub fn boost(&self, kind: ItemType) -> f32 {
        self.equipped().map_or(0.0, |item| item.boost_for(kind))
    }
}
