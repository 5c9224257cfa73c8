// src/save/src/lib.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use combat::{Arena, CombatError, Entity};
use error::GameError;
use hero::Player;
use tracing::{info, warn};

mod codec;

/// 存档数据：当前敌人序号 + 玩家完整状态 + 当前敌人状态
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecord {
    pub enemy_index: usize,
    pub player: Player,
    pub enemy: Entity,
}

impl SaveRecord {
    /// Snapshot of a battle in progress. `None` once the roster is cleared.
    pub fn capture(player: &Player, arena: &Arena) -> Option<Self> {
        let enemy = arena.current_enemy()?;
        Some(Self {
            enemy_index: arena.enemy_index(),
            player: player.clone(),
            enemy: enemy.clone(),
        })
    }

    /// 序列化为逐行文本
    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    /// 从逐行文本解析；任何一行出错都整体失败
    pub fn decode(text: &str) -> Result<Self, GameError> {
        codec::decode(text)
    }

    /// Rebuilds the battle at the saved position against `roster`.
    pub fn restore_arena(&self, roster: Vec<Entity>) -> Result<Arena, GameError> {
        Arena::resume(roster, self.enemy_index, self.enemy.clone()).map_err(|e| match e {
            CombatError::EnemyIndexOutOfRange { index, len } => {
                GameError::InvalidEnemyIndex { index, len }
            }
            other => GameError::InvalidGameState(other.to_string()),
        })
    }
}

/// 存档系统：单一存档文件
pub struct SaveSystem {
    path: PathBuf,
}

impl SaveSystem {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 检查是否有存档
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// 保存游戏状态
    pub fn save(&self, record: &SaveRecord) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create save directory")?;
        }

        // 创建临时文件
        let temp_path = self.path.with_extension("tmp");
        let mut file =
            fs::File::create(&temp_path).context("Failed to create temporary save file")?;

        file.write_all(record.encode().as_bytes())
            .context("Failed to write save data")?;
        file.flush().context("Failed to flush save data")?;

        // 原子性重命名
        fs::rename(&temp_path, &self.path).context("Failed to commit save file")?;

        info!(
            path = %self.path.display(),
            enemy_index = record.enemy_index,
            "game saved"
        );
        Ok(())
    }

    /// 加载游戏状态
    ///
    /// Nothing is applied by this call; the caller gets either a complete
    /// record or an error.
    pub fn load(&self) -> Result<SaveRecord, GameError> {
        let text = fs::read_to_string(&self.path)?;
        match SaveRecord::decode(&text) {
            Ok(record) => {
                info!(path = %self.path.display(), enemy_index = record.enemy_index, "game loaded");
                Ok(record)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "rejected save file");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::{Bag, Class};
    use items::{Item, ItemType};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn record() -> SaveRecord {
        let bag = Bag::from_parts(
            vec![Item::new("Shield", 20, 15.0, ItemType::Defense)],
            Some(0),
        )
        .unwrap();
        SaveRecord {
            enemy_index: 1,
            player: Player::from_parts(
                Entity::new("Hero", 100.0, 40.0, 30.0),
                Class::Hunter,
                70,
                bag,
            ),
            enemy: Entity::new("Gremlin", 15.0, 40.0, 5.0),
        }
    }

    const RECORD_TEXT: &str = "1\nHunter\n70\nHero\n100\n40\n30\n0\n1\nShield\n20\nGremlin\n15\n40\n5\n";

    #[test]
    fn encode_writes_fields_in_order() {
        assert_eq!(record().encode(), RECORD_TEXT);
    }

    #[test]
    fn decode_restores_identical_state() {
        let decoded = SaveRecord::decode(RECORD_TEXT).expect("valid record");
        assert_eq!(decoded, record());
        assert_eq!(decoded.player.current_item().map(|i| i.kind), Some(ItemType::Defense));
    }

    #[test]
    fn fractional_and_empty_state_roundtrip() {
        let snapshot = SaveRecord {
            enemy_index: 0,
            player: Player::from_parts(
                Entity::new("Merlin the Grey", 12.5, 35.0, 10.0),
                Class::Wizard,
                0,
                Bag::new(),
            ),
            enemy: Entity::new("Wompus with Gun", 0.25, 45.0, 20.0),
        };
        let text = snapshot.encode();
        assert!(text.contains("\n-1\n0\n"));
        assert_eq!(SaveRecord::decode(&text).unwrap(), snapshot);
    }

    #[test]
    fn non_numeric_gold_fails_the_whole_load() {
        let text = RECORD_TEXT.replacen("\n70\n", "\nseventy\n", 1);
        match SaveRecord::decode(&text) {
            Err(GameError::InvalidField { line, field, value }) => {
                assert_eq!((line, field, value.as_str()), (3, "gold", "seventy"));
            }
            other => panic!("expected invalid gold, got {:?}", other),
        }
    }

    #[test]
    fn unknown_job_is_rejected() {
        let text = RECORD_TEXT.replacen("Hunter", "Bard", 1);
        assert!(matches!(
            SaveRecord::decode(&text),
            Err(GameError::UnknownJob(label)) if label == "Bard"
        ));
    }

    #[test]
    fn item_not_stocked_for_job_is_rejected() {
        let text = RECORD_TEXT.replacen("Hunter", "Wizard", 1);
        assert!(matches!(
            SaveRecord::decode(&text),
            Err(GameError::UnknownItem(name)) if name == "Shield"
        ));
    }

    #[test]
    fn truncated_record_reports_missing_field() {
        let text: String = RECORD_TEXT.lines().take(12).map(|l| format!("{l}\n")).collect();
        assert!(matches!(
            SaveRecord::decode(&text),
            Err(GameError::MissingField { line: 13, field: "health" })
        ));
        assert!(matches!(
            SaveRecord::decode(""),
            Err(GameError::MissingField { line: 1, .. })
        ));
    }

    #[test]
    fn equipped_index_must_point_into_inventory() {
        for bad in ["\n30\n1\n1\n", "\n30\n-2\n1\n"] {
            let text = RECORD_TEXT.replacen("\n30\n0\n1\n", bad, 1);
            assert!(matches!(
                SaveRecord::decode(&text),
                Err(GameError::InvalidEquippedIndex { len: 1, .. })
            ));
        }
    }

    #[test]
    fn non_finite_or_negative_stats_are_rejected() {
        for (from, to) in [("\n15\n40\n5\n", "\nNaN\n40\n5\n"), ("\n40\n30\n", "\ninf\n30\n")] {
            let text = RECORD_TEXT.replacen(from, to, 1);
            assert!(
                matches!(SaveRecord::decode(&text), Err(GameError::InvalidField { .. })),
                "accepted {:?}",
                to
            );
        }

        let text = RECORD_TEXT.replacen("\nGremlin\n15\n", "\nGremlin\n-15\n", 1);
        assert!(matches!(
            SaveRecord::decode(&text),
            Err(GameError::InvalidField { line: 13, field: "health", .. })
        ));
    }

    #[test]
    fn restore_arena_checks_the_roster() {
        let record = record();
        let arena = record.restore_arena(combat::default_roster()).unwrap();
        assert_eq!(arena.current_enemy(), Some(&record.enemy));

        let short = vec![Entity::new("Only", 1.0, 1.0, 1.0)];
        assert!(matches!(
            record.restore_arena(short),
            Err(GameError::InvalidEnemyIndex { index: 1, len: 1 })
        ));
    }

    #[test]
    fn save_system_roundtrip() {
        let dir = tempdir().unwrap();
        let saves = SaveSystem::new(dir.path().join("slot").join("arena.sav"));
        assert!(!saves.exists());

        saves.save(&record()).unwrap();
        assert!(saves.exists());
        assert_eq!(saves.load().unwrap(), record());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let saves = SaveSystem::new(dir.path().join("absent.sav"));
        assert!(matches!(saves.load(), Err(GameError::IoError(_))));
    }

    #[test]
    fn corrupted_file_does_not_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arena.sav");
        fs::write(&path, RECORD_TEXT.replacen("\n70\n", "\n7O\n", 1)).unwrap();

        let err = SaveSystem::new(&path).load().unwrap_err();
        assert!(err.is_corrupted());
    }
}
