//! Battle state machine: one player against a fixed roster fought in order.

use thiserror::Error;
use tracing::info;

use crate::{Combat, Combatant, Entity};

#[derive(Debug, Error, PartialEq)]
pub enum CombatError {
    #[error("Enemy roster is empty")]
    EmptyRoster,
    #[error("Enemy index {index} outside roster of {len}")]
    EnemyIndexOutOfRange { index: usize, len: usize },
    #[error("Battle already finished: {0:?}")]
    BattleOver(BattleState),
}

/// 战斗整体状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    InProgress,
    /// Terminal: the run is lost.
    PlayerDefeated,
    /// Terminal: every enemy in the roster fell.
    AllEnemiesDefeated,
}

/// Result of checking the battle after an exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    PlayerDefeated,
    /// The current enemy fell and the next one stepped up.
    EnemyDefeated { defeated: String, next: String },
    AllEnemiesDefeated { last: String },
}

/// One player attack plus the enemy's counter-attack.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub dealt: f32,
    pub taken: f32,
    pub outcome: Outcome,
    /// Combat messages for UI
    pub logs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Arena {
    roster: Vec<Entity>,
    enemy_index: usize,
    state: BattleState,
}

impl Arena {
    pub fn new(roster: Vec<Entity>) -> Result<Self, CombatError> {
        Self::resume_at(roster, 0)
    }

    /// Restores a saved position: the roster entry at `enemy_index` is
    /// replaced by the saved enemy, damage included.
    pub fn resume(
        mut roster: Vec<Entity>,
        enemy_index: usize,
        enemy: Entity,
    ) -> Result<Self, CombatError> {
        let len = roster.len();
        let slot = roster
            .get_mut(enemy_index)
            .ok_or(CombatError::EnemyIndexOutOfRange {
                index: enemy_index,
                len,
            })?;
        *slot = enemy;
        Self::resume_at(roster, enemy_index)
    }

    fn resume_at(roster: Vec<Entity>, enemy_index: usize) -> Result<Self, CombatError> {
        if roster.is_empty() {
            return Err(CombatError::EmptyRoster);
        }
        if enemy_index >= roster.len() {
            return Err(CombatError::EnemyIndexOutOfRange {
                index: enemy_index,
                len: roster.len(),
            });
        }
        Ok(Self {
            roster,
            enemy_index,
            state: BattleState::InProgress,
        })
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != BattleState::InProgress
    }

    pub fn enemy_index(&self) -> usize {
        self.enemy_index
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// `None` once every enemy has been defeated.
    pub fn current_enemy(&self) -> Option<&Entity> {
        self.roster.get(self.enemy_index)
    }

    /// Player attacks, then the current enemy counter-attacks, then the
    /// outcome is checked.
    ///
    /// The enemy swings back even when the player's blow dropped it to 0,
    /// so both sides can fall in the same exchange. That tie resolves as a
    /// player defeat because [`Arena::check_outcome`] looks at the player first.
    pub fn exchange<P: Combatant + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<Exchange, CombatError> {
        if self.is_over() {
            return Err(CombatError::BattleOver(self.state));
        }

        let enemy = &mut self.roster[self.enemy_index];
        let dealt = Combat::resolve_attack(&*player, enemy);
        let taken = Combat::resolve_attack(&*enemy, player);

        let mut logs = vec![
            format!("You dealt {} damage!", dealt),
            format!("The {} dealt {} damage!", enemy.name(), taken),
        ];

        let outcome = self.check_outcome(&*player);
        match &outcome {
            Outcome::Continue => {}
            Outcome::PlayerDefeated => logs.push("You were slain...".to_string()),
            Outcome::EnemyDefeated { defeated, next } => {
                logs.push(format!("You slayed the {}", defeated));
                logs.push(format!("A {} approaches!", next));
            }
            Outcome::AllEnemiesDefeated { last } => {
                logs.push(format!("You slayed the {}", last));
                logs.push("You've slain all the enemies! You are a true warrior.".to_string());
            }
        }

        Ok(Exchange {
            dealt,
            taken,
            outcome,
            logs,
        })
    }

    /// Evaluates defeat conditions once, player first, and advances the
    /// roster when the current enemy has fallen.
    pub fn check_outcome<P: Combatant + ?Sized>(&mut self, player: &P) -> Outcome {
        if self.is_over() {
            return match self.state {
                BattleState::PlayerDefeated => Outcome::PlayerDefeated,
                _ => Outcome::AllEnemiesDefeated {
                    last: self.roster.last().map(|e| e.name().to_string()).unwrap_or_default(),
                },
            };
        }

        if player.is_defeated() {
            info!(player = player.name(), enemy_index = self.enemy_index, "player defeated");
            self.state = BattleState::PlayerDefeated;
            return Outcome::PlayerDefeated;
        }

        let enemy = &self.roster[self.enemy_index];
        if !enemy.is_defeated() {
            return Outcome::Continue;
        }

        let defeated = enemy.name().to_string();
        self.enemy_index += 1;
        info!(enemy = %defeated, next_index = self.enemy_index, "enemy defeated");

        match self.roster.get(self.enemy_index) {
            Some(next) => Outcome::EnemyDefeated {
                defeated,
                next: next.name().to_string(),
            },
            None => {
                self.state = BattleState::AllEnemiesDefeated;
                Outcome::AllEnemiesDefeated { last: defeated }
            }
        }
    }
}
