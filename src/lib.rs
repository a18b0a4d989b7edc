pub mod core;
pub mod data;
pub mod save;
pub mod services;

pub use crate::core::{
    CheatDetector, LevelProgress, LevelTable, NoCheatDetection, OfflineReport, PlayerState,
    ProgressionEngine, Referral, Upgrade, UpgradeSet, boost_cost, format_currency, format_number,
    upgrade_cost,
};
pub use data::{
    BoostDefinition, BoostKind, Catalog, LevelThreshold, StartingPlayer, UpgradeCategory,
    UpgradeDefinition, bundled_catalog, load_catalog_from_path, parse_catalog, read_json_file,
};
pub use save::{
    FileGateway, MemoryGateway, PersistenceGateway, SAVE_VERSION, SaveData, apply_save_data,
    export_to_base64, import_from_base64, load_from_json_string, save_data_from_engine,
    save_to_json_string,
};
pub use services::{
    Advisor, CannedAdvisor, GatewayReferralChannel, Identity, LeaderboardEntry, ReferralChannel,
    advice_or_fallback, generate_leaderboard,
};
