// src/combat/src/entity.rs

use serde::{Deserialize, Serialize};

/// 基础战斗单位：名字和三项基础属性
///
/// Health only ever goes down, through [`Entity::take_damage`], and stops at 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    name: String,
    health: f32,
    attack: f32,
    defense: f32,
}

impl Default for Entity {
    fn default() -> Self {
        Self::new("Default", 0.0, 0.0, 0.0)
    }
}

impl Entity {
    pub fn new(name: impl Into<String>, health: f32, attack: f32, defense: f32) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            defense,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn attack(&self) -> f32 {
        self.attack
    }

    pub fn defense(&self) -> f32 {
        self.defense
    }

    /// Subtracts already-mitigated damage, flooring health at 0.
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut gremlin = Entity::new("Gremlin", 15.0, 40.0, 5.0);
        gremlin.take_damage(10.0);
        assert_eq!(gremlin.health(), 5.0);
        gremlin.take_damage(35.0);
        assert_eq!(gremlin.health(), 0.0);
    }

    #[test]
    fn default_entity_is_empty() {
        let e = Entity::default();
        assert_eq!(e.name(), "Default");
        assert_eq!((e.health(), e.attack(), e.defense()), (0.0, 0.0, 0.0));
    }
}
