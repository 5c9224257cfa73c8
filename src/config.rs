use std::path::PathBuf;

use combat::{Entity, default_roster};

/// 游戏配置
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// 存档文件路径
    pub save_path: PathBuf,
    /// 新角色的初始金币
    pub starting_gold: u32,
    /// Enemies fought in order on each run.
    pub roster: Vec<Entity>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("battle_arena.sav"),
            starting_gold: 100,
            roster: default_roster(),
        }
    }
}
