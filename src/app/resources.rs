use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use bevy::prelude::*;
use fame_clicker::{
    BoostKind, Catalog, FileGateway, Identity, LeaderboardEntry, OfflineReport, ProgressionEngine,
    read_json_file,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "FAME_CLICKER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "fame_clicker.json";

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub tick_seconds: f32,
    pub auto_save_interval_seconds: f32,
    pub save_dir: PathBuf,
    pub user_id: String,
    pub display_name: Option<String>,
    pub start_param: Option<String>,
    pub admin_usernames: Vec<String>,
    pub catalog_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1.0,
            auto_save_interval_seconds: 5.0,
            save_dir: PathBuf::from("saves"),
            user_id: "default".to_string(),
            display_name: None,
            start_param: None,
            admin_usernames: Vec::new(),
            catalog_path: None,
        }
    }
}

impl RuntimeConfig {
    pub fn config_path() -> PathBuf {
        env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// `Ok(None)` when there is no config file at `path`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        read_json_file(path, "runtime config").map(Some)
    }
}

#[derive(Resource)]
pub struct SessionState {
    pub engine: ProgressionEngine,
    pub catalog: Catalog,
    pub identity: Identity,
    pub gateway: FileGateway,
    pub tick_timer: Timer,
    pub autosave_timer: Timer,
    pub last_save_error: Option<String>,
    pub offline_notice: Option<OfflineReport>,
    pub advice: Option<String>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub referred_by: Option<String>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Tap,
    BuyUpgrade(usize),
    BuyBoost(BoostKind),
    DismissOfflineNotice,
    RequestAdvice,
    ShowLeaderboard,
}

#[derive(Component)]
pub struct HudText;

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
