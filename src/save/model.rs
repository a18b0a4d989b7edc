use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

pub const SAVE_VERSION: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SaveReferral {
    pub id: String,
    pub name: String,
    pub league: String,
    pub reward: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavePlayer {
    pub character_name: String,
    pub balance: f64,
    pub fame_per_hour: f64,
    pub energy: f64,
    pub max_energy: u32,
    pub energy_regen_rate: f64,
    pub click_damage: u32,
    pub multitap_level: u32,
    pub energy_limit_level: u32,
    pub energy_regen_level: u32,
    pub level: u32,
    pub is_cheater: bool,
    pub last_sync_time: u64,
    pub wallet_address: Option<String>,
    #[serde(deserialize_with = "referrals_or_legacy")]
    pub referrals: Vec<SaveReferral>,
}

impl Default for SavePlayer {
    fn default() -> Self {
        super::bridge::player_to_save(&crate::core::PlayerState::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SaveUpgrade {
    pub id: String,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub version: u32,
    pub player: SavePlayer,
    pub upgrades: Vec<SaveUpgrade>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            player: SavePlayer::default(),
            upgrades: Vec::new(),
        }
    }
}

/// Older snapshots stored a bare referral count; those read as an empty list.
fn referrals_or_legacy<'de, D>(deserializer: D) -> Result<Vec<SaveReferral>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Referrals {
        List(Vec<SaveReferral>),
        Legacy(IgnoredAny),
    }

    Ok(match Referrals::deserialize(deserializer)? {
        Referrals::List(list) => list,
        Referrals::Legacy(_) => Vec::new(),
    })
}
