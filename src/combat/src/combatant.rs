// src/combat/src/combatant.rs

use crate::entity::Entity;

/// 表示可以参加战斗的单位
///
/// The accessors return *effective* stats. A plain [`Entity`] has no item
/// layer, so its effective stats are its base stats.
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 当前有效生命值
    fn health(&self) -> f32;

    /// 有效攻击力
    fn attack_power(&self) -> f32;

    /// 有效防御力
    fn defense(&self) -> f32;

    /// 扣除已结算的伤害
    fn take_damage(&mut self, amount: f32);

    /// 是否被击败
    fn is_defeated(&self) -> bool {
        self.health() <= 0.0
    }
}

// 为Entity实现Combatant
impl Combatant for Entity {
    fn name(&self) -> &str {
        Entity::name(self)
    }

    fn health(&self) -> f32 {
        Entity::health(self)
    }

    fn attack_power(&self) -> f32 {
        self.attack()
    }

    fn defense(&self) -> f32 {
        Entity::defense(self)
    }

    fn take_damage(&mut self, amount: f32) {
        Entity::take_damage(self, amount)
    }
}
