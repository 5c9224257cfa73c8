//! Scripted prompt for driving `Game` without a terminal.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Result, anyhow};
use battle_arena::{GameConfig, Prompt};
use combat::Entity;

/// Replays queued answers and records everything the game shows.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    choices: VecDeque<usize>,
    pub shown: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(lines: &[&str], choices: &[usize]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            choices: choices.iter().copied().collect(),
            shown: Vec::new(),
        }
    }

    pub fn saw(&self, text: &str) -> bool {
        self.shown.iter().any(|line| line.contains(text))
    }
}

impl Prompt for ScriptedPrompt {
    fn choose(&mut self, description: &str, options: &[&str]) -> Result<usize> {
        let choice = self
            .choices
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of choices at: {description}"))?;
        assert!(choice < options.len(), "scripted choice {choice} not in {options:?}");
        Ok(choice)
    }

    fn read_line(&mut self, description: &str) -> Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of lines at: {description}"))
    }

    fn show(&mut self, message: &str) -> Result<()> {
        self.shown.push(message.to_string());
        Ok(())
    }
}

pub fn config(save_path: &Path, roster: Vec<Entity>) -> GameConfig {
    GameConfig {
        save_path: save_path.to_path_buf(),
        starting_gold: 100,
        roster,
    }
}
