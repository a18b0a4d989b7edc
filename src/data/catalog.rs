use std::collections::HashSet;

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub starting_player: StartingPlayer,
    #[serde(default)]
    pub levels: Vec<LevelThreshold>,
    #[serde(default)]
    pub upgrades: Vec<UpgradeDefinition>,
    #[serde(default)]
    pub boosts: Vec<BoostDefinition>,
}

/// Values a brand new player starts from. Derived stats (regen rate, boost
/// tiers, rank) are not configurable and always start at tier 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingPlayer {
    pub character_name: String,
    pub balance: f64,
    pub energy: f64,
    pub max_energy: u32,
    pub click_damage: u32,
}

impl Default for StartingPlayer {
    fn default() -> Self {
        Self {
            character_name: "Novice".to_string(),
            balance: 0.0,
            energy: 1000.0,
            max_energy: 1000,
            click_damage: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelThreshold {
    pub threshold: u64,
    pub level: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeCategory {
    Training,
    Gear,
    Team,
    Special,
}

impl UpgradeCategory {
    pub fn all() -> &'static [UpgradeCategory] {
        &[
            UpgradeCategory::Training,
            UpgradeCategory::Gear,
            UpgradeCategory::Team,
            UpgradeCategory::Special,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            UpgradeCategory::Training => "Training",
            UpgradeCategory::Gear => "Gear",
            UpgradeCategory::Team => "Team",
            UpgradeCategory::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: UpgradeCategory,
    #[serde(default)]
    pub image: String,
    pub initial_cost: u64,
    pub base_profit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostKind {
    Energy,
    Multitap,
    Limit,
    Regen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effect_description: String,
    #[serde(rename = "type")]
    pub kind: BoostKind,
    #[serde(default)]
    pub is_daily: bool,
    #[serde(default)]
    pub base_cost: u64,
}

impl Catalog {
    pub fn boost_of_kind(&self, kind: BoostKind) -> Option<&BoostDefinition> {
        self.boosts.iter().find(|boost| boost.kind == kind)
    }

    pub fn daily_boosts(&self) -> impl Iterator<Item = &BoostDefinition> {
        self.boosts.iter().filter(|boost| boost.is_daily)
    }

    pub fn upgradeable_boosts(&self) -> impl Iterator<Item = &BoostDefinition> {
        self.boosts.iter().filter(|boost| !boost.is_daily)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.levels.is_empty(), "level table is empty");
        ensure!(
            self.levels[0].threshold == 0,
            "first level threshold must be 0, found {}",
            self.levels[0].threshold
        );
        for pair in self.levels.windows(2) {
            if pair[1].threshold <= pair[0].threshold || pair[1].level <= pair[0].level {
                bail!(
                    "level table must ascend: '{}' ({}) follows '{}' ({})",
                    pair[1].name,
                    pair[1].threshold,
                    pair[0].name,
                    pair[0].threshold
                );
            }
        }

        ensure!(
            self.starting_player.max_energy > 0,
            "starting max_energy must be positive"
        );
        ensure!(
            self.starting_player.click_damage > 0,
            "starting click_damage must be positive"
        );

        let mut seen = HashSet::new();
        for upgrade in &self.upgrades {
            ensure!(
                seen.insert(upgrade.id.as_str()),
                "duplicate upgrade id '{}'",
                upgrade.id
            );
            ensure!(
                upgrade.initial_cost > 0,
                "upgrade '{}' has zero initial cost",
                upgrade.id
            );
        }

        let mut seen = HashSet::new();
        for boost in &self.boosts {
            ensure!(
                seen.insert(boost.id.as_str()),
                "duplicate boost id '{}'",
                boost.id
            );
            if !boost.is_daily {
                ensure!(
                    boost.base_cost > 0,
                    "upgradeable boost '{}' has zero base cost",
                    boost.id
                );
            }
        }

        Ok(())
    }
}
