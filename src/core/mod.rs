mod boosts;
mod cheat;
mod engine;
mod format;
mod levels;
mod player;
mod upgrades;

pub use boosts::{
    BASE_REGEN_RATE, ENERGY_LIMIT_STEP, MULTITAP_DAMAGE_STEP, boost_cost, regen_rate_for_level,
};
pub use cheat::{CheatDetector, NoCheatDetection};
pub use engine::{OFFLINE_GRACE_SECONDS, OfflineReport, ProgressionEngine, SECONDS_PER_HOUR};
pub use format::{format_currency, format_number};
pub use levels::{LevelProgress, LevelTable};
pub use player::{PlayerState, Referral};
pub use upgrades::{UPGRADE_COST_GROWTH, Upgrade, UpgradeSet, upgrade_cost};
