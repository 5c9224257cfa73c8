// src/combat/src/lib.rs

use tracing::debug;

pub mod arena;
pub mod combatant;
pub mod enemy;
pub mod entity;


pub use crate::arena::{Arena, BattleState, CombatError, Exchange, Outcome};
pub use crate::combatant::Combatant;
pub use crate::enemy::default_roster;
pub use crate::entity::Entity;

/// Handles combat interactions between entities
pub struct Combat;

impl Combat {
    /// Damage `attacker` would deal to `defender`: effective attack minus
    /// effective defense, never below zero.
    pub fn calculate_damage<T, U>(attacker: &T, defender: &U) -> f32
    where
        T: Combatant + ?Sized,
        U: Combatant + ?Sized,
    {
        (attacker.attack_power() - defender.defense()).max(0.0)
    }

    /// Resolve a single attack and return the damage dealt.
    pub fn resolve_attack<T, U>(attacker: &T, defender: &mut U) -> f32
    where
        T: Combatant + ?Sized,
        U: Combatant + ?Sized,
    {
        let damage = Self::calculate_damage(attacker, defender);
        defender.take_damage(damage);

        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            damage,
            defender_health = defender.health(),
            "attack resolved"
        );
        damage
    }
}
