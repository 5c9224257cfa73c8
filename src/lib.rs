pub mod config;
pub mod console;
pub mod game;

pub use config::GameConfig;
pub use console::ConsolePrompt;
pub use game::{Game, Prompt, Scene};
