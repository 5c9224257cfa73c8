//! Scene controller: name entry → class selection → battle → restart menu.
//!
//! All user interaction goes through [`Prompt`], so a whole run can be
//! driven headlessly from a script.

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::{info, warn};

use combat::{Arena, Combatant, Outcome};
use error::{GameError, handle_error};
use hero::{Class, Player};
use save::{SaveRecord, SaveSystem};

use crate::config::GameConfig;

/// 输入/输出协作者：显示选项，返回从0开始的选择
pub trait Prompt {
    /// Shows `options` under `description` and returns the chosen index.
    fn choose(&mut self, description: &str, options: &[&str]) -> Result<usize>;

    /// 读取一行文本
    fn read_line(&mut self, description: &str) -> Result<String>;

    /// 显示消息
    fn show(&mut self, message: &str) -> Result<()>;

    /// Lets the user read what was just shown before the next screen.
    fn pause(&mut self) -> Result<()> {
        Ok(())
    }
}

/// 当前场景
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    NameEntry,
    ClassSelection,
    Battle,
    RestartMenu,
    Exit,
}

/// 战斗菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BattleAction {
    Attack,
    Equip,
    Unequip,
    Shop,
    Save,
    Load,
}

impl BattleAction {
    const ALL: [BattleAction; 6] = [
        BattleAction::Attack,
        BattleAction::Equip,
        BattleAction::Unequip,
        BattleAction::Shop,
        BattleAction::Save,
        BattleAction::Load,
    ];

    fn label(self) -> &'static str {
        match self {
            BattleAction::Attack => "Attack",
            BattleAction::Equip => "Equip Item",
            BattleAction::Unequip => "Unequip Item",
            BattleAction::Shop => "Shop",
            BattleAction::Save => "Save",
            BattleAction::Load => "Load",
        }
    }
}

pub struct Game<P: Prompt> {
    config: GameConfig,
    prompt: P,
    saves: SaveSystem,
    scene: Scene,
    player_name: String,
    player: Option<Player>,
    arena: Option<Arena>,
}

impl<P: Prompt> Game<P> {
    pub fn new(config: GameConfig, prompt: P) -> Self {
        let saves = SaveSystem::new(&config.save_path);
        Self {
            config,
            prompt,
            saves,
            scene: Scene::NameEntry,
            player_name: String::new(),
            player: None,
            arena: None,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// 运行直到玩家退出
    pub fn run(&mut self) -> Result<()> {
        while self.scene != Scene::Exit {
            self.step()?;
        }
        self.prompt.show("Goodbye")
    }

    /// Runs the current scene once.
    pub fn step(&mut self) -> Result<()> {
        match self.scene {
            Scene::NameEntry => self.name_entry(),
            Scene::ClassSelection => self.class_selection(),
            Scene::Battle => self.battle(),
            Scene::RestartMenu => self.restart_menu(),
            Scene::Exit => Ok(()),
        }
    }

    fn name_entry(&mut self) -> Result<()> {
        let name = self
            .prompt
            .read_line("Welcome to the Battle Arena! What is your fighter's name?")?;
        let name = name.trim();
        if name.is_empty() {
            return self.prompt.show("Your fighter needs a name.");
        }

        let question = format!(
            "You have entered {}. Are you sure you want to keep this name?",
            name
        );
        if self.prompt.choose(&question, &["Yes", "No"])? == 0 {
            self.player_name = name.to_string();
            self.prompt.show(&format!("Welcome {}!", name))?;
            self.scene = Scene::ClassSelection;
        }
        Ok(())
    }

    fn class_selection(&mut self) -> Result<()> {
        let classes: Vec<Class> = Class::iter().collect();
        let labels: Vec<&str> = classes.iter().map(|class| class.label()).collect();
        let choice = self.prompt.choose("Please choose a class", &labels)?;
        let Some(&class) = classes.get(choice) else {
            return self.prompt.show("Invalid choice.");
        };

        let arena = Arena::new(self.config.roster.clone()).context("Cannot start a battle")?;
        let player = Player::new(self.player_name.clone(), class, self.config.starting_gold);
        info!(name = %self.player_name, job = %class, "new run started");

        self.player = Some(player);
        self.arena = Some(arena);
        self.scene = Scene::Battle;
        Ok(())
    }

    fn battle(&mut self) -> Result<()> {
        let (Some(player), Some(arena)) = (self.player.as_ref(), self.arena.as_ref()) else {
            self.scene = Scene::NameEntry;
            return Ok(());
        };
        let Some(enemy) = arena.current_enemy() else {
            self.scene = Scene::RestartMenu;
            return Ok(());
        };

        let screen = format!(
            "{}\nEnemy {} of {}\n{}\nA {} approaches you. What do you do?",
            player_block(player),
            arena.enemy_index() + 1,
            arena.roster_len(),
            stat_block(enemy),
            enemy.name()
        );
        let labels: Vec<&str> = BattleAction::ALL.iter().map(|a| a.label()).collect();
        let choice = self.prompt.choose(&screen, &labels)?;

        match BattleAction::ALL.get(choice) {
            Some(BattleAction::Attack) => self.attack(),
            Some(BattleAction::Equip) => self.equip(),
            Some(BattleAction::Unequip) => self.unequip(),
            Some(BattleAction::Shop) => self.shop(),
            Some(BattleAction::Save) => self.save(),
            Some(BattleAction::Load) => {
                self.load();
                Ok(())
            }
            None => self.prompt.show("Invalid choice."),
        }
    }

    fn attack(&mut self) -> Result<()> {
        let (Some(player), Some(arena)) = (self.player.as_mut(), self.arena.as_mut()) else {
            return Ok(());
        };

        let exchange = arena.exchange(player)?;
        for line in &exchange.logs {
            self.prompt.show(line)?;
        }
        if matches!(
            exchange.outcome,
            Outcome::PlayerDefeated | Outcome::AllEnemiesDefeated { .. }
        ) {
            self.scene = Scene::RestartMenu;
        }
        self.prompt.pause()
    }

    fn equip(&mut self) -> Result<()> {
        let Some(player) = self.player.as_mut() else {
            return Ok(());
        };
        if player.bag().is_empty() {
            return self.prompt.show("You have nothing to equip.");
        }

        let names = player.inventory_names();
        let choice = self.prompt.choose("Which item would you like to equip?", &names)?;
        let message = match player.try_equip(choice) {
            Ok(item) => format!(
                "You equipped the {}. Be sure to unequip this item if you would like to use another item.",
                item.name
            ),
            Err(e) => format!("Could not equip: {}", e),
        };
        self.prompt.show(&message)
    }

    fn unequip(&mut self) -> Result<()> {
        let Some(player) = self.player.as_mut() else {
            return Ok(());
        };
        let message = match player.try_unequip() {
            Ok(item) => format!("You put away the {}.", item.name),
            Err(_) => "You don't have anything equipped.".to_string(),
        };
        self.prompt.show(&message)
    }

    fn shop(&mut self) -> Result<()> {
        let Some(player) = self.player.as_mut() else {
            return Ok(());
        };

        let shop = player.job().shop();
        let labels: Vec<String> = shop.items().iter().map(|item| item.to_string()).collect();
        let mut options: Vec<&str> = labels.iter().map(String::as_str).collect();
        options.push("Leave");

        let greeting = format!("Welcome to the shop! You have {} gold.", player.gold());
        let choice = self.prompt.choose(&greeting, &options)?;
        if choice == shop.items().len() {
            return Ok(());
        }

        let message = match shop.sell(player, choice) {
            Ok(item) => format!("You bought the {}. {} gold left.", item.name, player.gold()),
            Err(e) => e.to_string(),
        };
        self.prompt.show(&message)
    }

    fn save(&mut self) -> Result<()> {
        let record = match (self.player.as_ref(), self.arena.as_ref()) {
            (Some(player), Some(arena)) => SaveRecord::capture(player, arena),
            _ => None,
        };
        let Some(record) = record else {
            return self.prompt.show("Nothing to save.");
        };

        match self.saves.save(&record).map_err(GameError::from) {
            Ok(()) => self.prompt.show("Game Saved"),
            Err(e) => {
                warn!(error = %e, "save failed");
                self.prompt.show(&handle_error(&e))
            }
        }
    }

    /// Replaces the current run with the saved one. On any failure the
    /// current run and scene are left exactly as they were.
    pub fn load(&mut self) -> bool {
        match self.read_save() {
            Ok((player, arena)) => {
                self.player_name = player.name().to_string();
                self.player = Some(player);
                self.arena = Some(arena);
                self.scene = Scene::Battle;
                self.notify("Load Successful");
                true
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                self.notify(&handle_error(&e));
                false
            }
        }
    }

    // 加载结果已确定，提示失败只记录日志
    fn notify(&mut self, message: &str) {
        if let Err(e) = self.prompt.show(message) {
            warn!(error = %format!("{:#}", e), shown = message, "prompt failed");
        }
    }

    fn read_save(&self) -> Result<(Player, Arena), GameError> {
        let record = self.saves.load()?;
        let arena = record.restore_arena(self.config.roster.clone())?;
        Ok((record.player, arena))
    }

    fn restart_menu(&mut self) -> Result<()> {
        match self
            .prompt
            .choose("Play Again?", &["Yes", "Load Game", "No"])?
        {
            0 => {
                self.player = None;
                self.arena = None;
                self.scene = Scene::NameEntry;
            }
            1 => {
                self.load();
            }
            _ => self.scene = Scene::Exit,
        }
        Ok(())
    }
}

fn stat_block(combatant: &dyn Combatant) -> String {
    format!(
        "Name: {}\nHealth: {}\nAttack Power: {}\nDefense Power: {}\n",
        combatant.name(),
        combatant.health(),
        combatant.attack_power(),
        combatant.defense()
    )
}

fn player_block(player: &Player) -> String {
    format!(
        "{}Job: {}\nGold: {}\nItem: {}\n",
        stat_block(player),
        player.job(),
        player.gold(),
        player.bag().equipped_name()
    )
}
