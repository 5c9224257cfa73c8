// src/combat/src/enemy.rs

use crate::entity::Entity;

/// 默认敌人名单，按顺序迎战
pub fn default_roster() -> Vec<Entity> {
    vec![
        Entity::new("Fraawg", 30.0, 15.0, 5.0),
        Entity::new("Sassafrazzz", 60.0, 25.0, 10.0),
        Entity::new("Wompus with Gun", 100.0, 45.0, 20.0),
    ]
}
