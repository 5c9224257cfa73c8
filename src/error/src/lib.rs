//! 游戏错误处理模块
//!
//! Errors raised while persisting or restoring a run. Validation failures
//! (buy/equip/sell) live next to the types they validate.

use thiserror::Error;

/// 存档读写过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 写入存档失败
    #[error("Save system error: {0}")]
    SaveError(#[from] anyhow::Error),

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A line the record requires was not there.
    #[error("Missing field `{field}` at line {line}")]
    MissingField { line: usize, field: &'static str },

    /// A numeric line that did not parse.
    #[error("Invalid value {value:?} for `{field}` at line {line}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// 职业标签无法识别
    #[error("Unknown job label: {0}")]
    UnknownJob(String),

    /// Inventory entry whose name is not stocked for the saved job.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Equipped index {index} outside inventory of {len}")]
    InvalidEquippedIndex { index: i64, len: usize },

    #[error("Enemy index {index} outside roster of {len}")]
    InvalidEnemyIndex { index: usize, len: usize },

    /// 游戏状态无效
    #[error("Invalid game state: {0}")]
    InvalidGameState(String),
}

impl GameError {
    /// True when the save file itself was readable but its contents were not.
    pub fn is_corrupted(&self) -> bool {
        matches!(
            self,
            GameError::MissingField { .. }
                | GameError::InvalidField { .. }
                | GameError::UnknownJob(_)
                | GameError::UnknownItem(_)
                | GameError::InvalidEquippedIndex { .. }
                | GameError::InvalidEnemyIndex { .. }
        )
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::SaveError(e) => format!("Save Failed: {:#}", e),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Load Failed: no save file found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "Load Failed: permission denied".to_string()
            }
            _ => format!("Load Failed: {}", e),
        },
        e if e.is_corrupted() => "Load Failed: save data is corrupted".to_string(),
        _ => format!("Load Failed: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_load_failed() {
        let err = GameError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(handle_error(&err), "Load Failed: no save file found");
        assert!(!err.is_corrupted());
    }

    #[test]
    fn parse_failures_are_corruption() {
        let err = GameError::InvalidField {
            line: 3,
            field: "gold",
            value: "lots".into(),
        };
        assert!(err.is_corrupted());
        assert_eq!(handle_error(&err), "Load Failed: save data is corrupted");
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn write_failures_read_as_save_failed() {
        let err = GameError::from(
            anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied))
                .context("Failed to create temporary save file"),
        );
        let message = handle_error(&err);
        assert!(message.starts_with("Save Failed: Failed to create temporary save file"));
        assert!(!err.is_corrupted());
    }
}
