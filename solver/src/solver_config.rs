use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_solver_config.yaml";
pub const MAX_SELF_PLAY_GAMES: u32 = 1000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, SolverConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SolverConfig {
    pub use_log_prefix: bool,
    pub log_prefix: String,
    pub show_board: bool,
    pub show_search_stats: bool,
    pub self_play_games: u32,
    pub random_seed: Option<u64>,
}

impl Validate for SolverConfig {
    fn validate(&self) -> Result<(), String> {
        if self.log_prefix.trim().is_empty() {
            return Err("log_prefix must not be empty".to_string());
        }
        if self.self_play_games == 0 || self.self_play_games > MAX_SELF_PLAY_GAMES {
            return Err(format!(
                "self_play_games must be between 1 and {}",
                MAX_SELF_PLAY_GAMES
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            use_log_prefix: false,
            log_prefix: "Solver".to_string(),
            show_board: true,
            show_search_stats: false,
            self_play_games: 1,
            random_seed: None,
        }
    }
}
