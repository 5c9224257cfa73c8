// src/hero/src/lib.rs

mod bag;

pub mod class;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use self::bag::{Bag, EquipError};
pub use self::class::Class;

use combat::{Combatant, Entity};
use items::{Customer, Item, ItemType, ShopError};

/// 玩家角色：基础属性 + 职业 + 金币 + 背包
///
/// Effective stats are the base stats plus the boost of whatever is
/// equipped. Only one item can be equipped, so at most one of them differs
/// from its base value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    base: Entity,
    job: Class,
    gold: u32,
    bag: Bag,
}

impl Player {
    /// 按职业初始属性创建新角色
    pub fn new(name: impl Into<String>, job: Class, gold: u32) -> Self {
        let (health, attack, defense) = job.base_stats();
        Self::from_parts(Entity::new(name, health, attack, defense), job, gold, Bag::new())
    }

    /// 从已有数据组装角色（读档时使用）
    pub fn from_parts(base: Entity, job: Class, gold: u32, bag: Bag) -> Self {
        Self {
            base,
            job,
            gold,
            bag,
        }
    }

    pub fn base(&self) -> &Entity {
        &self.base
    }

    pub fn job(&self) -> Class {
        self.job
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// 当前装备，未装备时为 `None`
    pub fn current_item(&self) -> Option<&Item> {
        self.bag.equipped()
    }

    pub fn inventory_names(&self) -> Vec<&str> {
        self.bag.item_names()
    }

    /// 装备背包中指定位置的物品
    pub fn try_equip(&mut self, index: usize) -> Result<&Item, EquipError> {
        let item = self.bag.equip(index)?;
        info!(item = %item.name, index, "item equipped");
        Ok(item)
    }

    /// 卸下当前装备
    pub fn try_unequip(&mut self) -> Result<&Item, EquipError> {
        let item = self.bag.unequip()?;
        info!(item = %item.name, "item unequipped");
        Ok(item)
    }
}

impl Customer for Player {
    fn gold(&self) -> u32 {
        self.gold
    }

    fn buy(&mut self, item: &Item) -> Result<(), ShopError> {
        if self.gold < item.cost {
            return Err(ShopError::InsufficientGold {
                cost: item.cost,
                gold: self.gold,
            });
        }
        self.gold -= item.cost;
        self.bag.add(item.clone());
        Ok(())
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        self.base.name()
    }

    /// A health item is a standing bonus on top of the tracked base health,
    /// not a one-time heal: unequipping it takes the bonus away again.
    fn health(&self) -> f32 {
        self.base.health() + self.bag.boost(ItemType::Health)
    }

    fn attack_power(&self) -> f32 {
        self.base.attack() + self.bag.boost(ItemType::Attack)
    }

    fn defense(&self) -> f32 {
        self.base.defense() + self.bag.boost(ItemType::Defense)
    }

    fn take_damage(&mut self, amount: f32) {
        self.base.take_damage(amount)
    }

    // 基础生命值归零即阵亡，生命加成不能让角色在0血时继续存活
    fn is_defeated(&self) -> bool {
        self.base.health() <= 0.0 || self.health() <= 0.0
    }
}
