//! Positional text format: one value per line, no header, no checksum.
//!
//! ```text
//! enemy index
//! job
//! gold
//! name / health / attack / defense        (player base stats)
//! equipped index (-1 = nothing)
//! inventory length
//! name / cost                             (per inventory item)
//! name / health / attack / defense        (current enemy)
//! ```

use std::fmt::Write as _;
use std::str::FromStr;

use combat::Entity;
use error::GameError;
use hero::{Bag, Class, Player};

use crate::SaveRecord;

/// Sentinel written for an empty equip slot.
const NOTHING_EQUIPPED: i64 = -1;

pub(crate) fn encode(record: &SaveRecord) -> String {
    let mut out = String::new();
    let player = &record.player;
    let bag = player.bag();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", record.enemy_index);
    let _ = writeln!(out, "{}", player.job().label());
    let _ = writeln!(out, "{}", player.gold());
    write_entity(&mut out, player.base());
    let _ = writeln!(
        out,
        "{}",
        bag.equipped_index()
            .map_or(NOTHING_EQUIPPED, |index| index as i64)
    );
    let _ = writeln!(out, "{}", bag.len());
    for item in bag.items() {
        let _ = writeln!(out, "{}", item.name);
        let _ = writeln!(out, "{}", item.cost);
    }
    write_entity(&mut out, &record.enemy);
    out
}

fn write_entity(out: &mut String, entity: &Entity) {
    let _ = writeln!(out, "{}", entity.name());
    let _ = writeln!(out, "{}", entity.health());
    let _ = writeln!(out, "{}", entity.attack());
    let _ = writeln!(out, "{}", entity.defense());
}

pub(crate) fn decode(text: &str) -> Result<SaveRecord, GameError> {
    let mut reader = LineReader::new(text);

    let enemy_index = reader.parse::<usize>("enemy index")?;

    let label = reader.next("job")?;
    let job = Class::from_str(label).map_err(|_| GameError::UnknownJob(label.to_string()))?;
    let gold = reader.parse::<u32>("gold")?;
    let base = reader.entity()?;

    let raw_equipped = reader.parse::<i64>("equipped index")?;
    let len = reader.parse::<usize>("inventory length")?;

    // Cap the up-front reservation; a corrupt length must not trigger a huge allocation.
    let mut items = Vec::with_capacity(len.min(64));
    for _ in 0..len {
        let name = reader.next("item name")?;
        let cost = reader.parse::<u32>("item cost")?;
        let item = job
            .stocked_item(name)
            .ok_or_else(|| GameError::UnknownItem(name.to_string()))?;
        items.push(item.with_cost(cost));
    }

    let invalid = || GameError::InvalidEquippedIndex {
        index: raw_equipped,
        len,
    };
    let equipped = match raw_equipped {
        NOTHING_EQUIPPED => None,
        index => Some(usize::try_from(index).map_err(|_| invalid())?),
    };
    let bag = Bag::from_parts(items, equipped).map_err(|_| invalid())?;

    let enemy = reader.entity()?;

    Ok(SaveRecord {
        enemy_index,
        player: Player::from_parts(base, job, gold, bag),
        enemy,
    })
}

struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str, GameError> {
        self.line += 1;
        self.lines.next().ok_or(GameError::MissingField {
            line: self.line,
            field,
        })
    }

    fn parse<T: FromStr>(&mut self, field: &'static str) -> Result<T, GameError> {
        let value = self.next(field)?;
        value.trim().parse().map_err(|_| GameError::InvalidField {
            line: self.line,
            field,
            value: value.to_string(),
        })
    }

    /// 属性值必须是有限的非负数
    fn stat(&mut self, field: &'static str) -> Result<f32, GameError> {
        let value = self.parse::<f32>(field)?;
        if !value.is_finite() || value < 0.0 {
            return Err(GameError::InvalidField {
                line: self.line,
                field,
                value: value.to_string(),
            });
        }
        Ok(value)
    }

    fn entity(&mut self) -> Result<Entity, GameError> {
        let name = self.next("name")?;
        let health = self.stat("health")?;
        let attack = self.stat("attack")?;
        let defense = self.stat("defense")?;
        Ok(Entity::new(name, health, attack, defense))
    }
}
