use tracing::{debug, info};

use crate::data::{BoostDefinition, BoostKind, Catalog};

use super::boosts::{ENERGY_LIMIT_STEP, MULTITAP_DAMAGE_STEP, boost_cost};
use super::cheat::{CheatDetector, NoCheatDetection};
use super::levels::{LevelProgress, LevelTable};
use super::player::{PlayerState, Referral};
use super::upgrades::UpgradeSet;

/// Offline absences at or below this many seconds earn nothing.
pub const OFFLINE_GRACE_SECONDS: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfflineReport {
    pub elapsed_seconds: f64,
    /// Already credited to the balance.
    pub earned: u64,
    pub energy_restored: f64,
}

/// Owns the player and upgrade state for one session and applies every
/// state transition. Rejected commands leave the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionEngine<D = NoCheatDetection> {
    pub player: PlayerState,
    pub upgrades: UpgradeSet,
    levels: LevelTable,
    cheat_detector: D,
}

impl ProgressionEngine<NoCheatDetection> {
    pub fn new(catalog: &Catalog, now_ms: u64) -> Self {
        Self::from_parts(
            PlayerState::fresh(&catalog.starting_player, now_ms),
            UpgradeSet::from_definitions(&catalog.upgrades),
            LevelTable::new(catalog.levels.clone()),
        )
    }

    pub fn from_parts(player: PlayerState, upgrades: UpgradeSet, levels: LevelTable) -> Self {
        Self {
            player,
            upgrades,
            levels,
            cheat_detector: NoCheatDetection,
        }
    }
}

impl<D: CheatDetector> ProgressionEngine<D> {
    pub fn with_cheat_detector<E: CheatDetector>(self, detector: E) -> ProgressionEngine<E> {
        ProgressionEngine {
            player: self.player,
            upgrades: self.upgrades,
            levels: self.levels,
            cheat_detector: detector,
        }
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Passive income and energy regeneration for `elapsed_seconds` of
    /// foreground time.
    pub fn tick(&mut self, elapsed_seconds: f64) {
        if !(elapsed_seconds > 0.0) {
            return;
        }
        self.player.sync_regen_rate();
        self.player
            .credit(self.player.fame_per_hour / SECONDS_PER_HOUR * elapsed_seconds);
        self.player
            .restore_energy(self.player.energy_regen_rate * elapsed_seconds);
        self.recompute_level();
    }

    /// Seconds between the last sync and `now_ms`; zero if the clock moved
    /// backwards.
    pub fn elapsed_since_sync(&self, now_ms: u64) -> f64 {
        now_ms.saturating_sub(self.player.last_sync_time) as f64 / 1000.0
    }

    /// Catches up on time spent away. Earnings are credited immediately;
    /// the returned report is for display only.
    pub fn reconcile_offline(&mut self, elapsed_seconds: f64, now_ms: u64) -> OfflineReport {
        let elapsed_seconds = if elapsed_seconds > 0.0 {
            elapsed_seconds
        } else {
            0.0
        };

        let earned = if elapsed_seconds > OFFLINE_GRACE_SECONDS && self.player.fame_per_hour > 0.0
        {
            (elapsed_seconds * self.player.fame_per_hour / SECONDS_PER_HOUR).floor() as u64
        } else {
            0
        };
        self.player.credit(earned as f64);

        self.player.sync_regen_rate();
        let energy_before = self.player.energy;
        self.player
            .restore_energy(self.player.energy_regen_rate * elapsed_seconds);
        let energy_restored = self.player.energy - energy_before;

        self.player.last_sync_time = now_ms;
        self.recompute_level();

        info!(
            elapsed_seconds,
            earned, energy_restored, "reconciled offline progress"
        );

        OfflineReport {
            elapsed_seconds,
            earned,
            energy_restored,
        }
    }

    /// Applies up to `count` taps in order, each spending one energy.
    /// Returns how many were applied; the rest were rejected for lack of
    /// energy.
    pub fn tap(&mut self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        if self.cheat_detector.inspect_tap(&self.player, count) {
            self.flag_cheater();
        }

        let mut applied = 0;
        for _ in 0..count {
            if !self.player.consume_energy() {
                break;
            }
            self.player.credit(f64::from(self.player.click_damage));
            applied += 1;
        }

        if applied > 0 {
            self.recompute_level();
        }
        applied
    }

    pub fn can_afford_upgrade(&self, upgrade_id: &str) -> bool {
        self.upgrades
            .get(upgrade_id)
            .is_some_and(|upgrade| self.player.balance >= upgrade.cost as f64)
    }

    pub fn buy_upgrade(&mut self, upgrade_id: &str) -> bool {
        let Some(upgrade) = self.upgrades.get_mut(upgrade_id) else {
            return false;
        };
        if !self.player.spend(upgrade.cost) {
            return false;
        }

        let paid = upgrade.cost;
        self.player.fame_per_hour += upgrade.base_profit as f64;
        upgrade.level_up();
        debug!(
            upgrade = upgrade_id,
            level = upgrade.level,
            paid,
            next_cost = upgrade.cost,
            "bought upgrade"
        );
        true
    }

    /// Current tier of the stat a boost improves. The energy refill has no
    /// tier and reports 0.
    pub fn boost_level(&self, kind: BoostKind) -> u32 {
        match kind {
            BoostKind::Energy => 0,
            BoostKind::Multitap => self.player.multitap_level,
            BoostKind::Limit => self.player.energy_limit_level,
            BoostKind::Regen => self.player.energy_regen_level,
        }
    }

    pub fn boost_cost(&self, boost: &BoostDefinition) -> u64 {
        if boost.is_daily {
            return 0;
        }
        boost_cost(boost.base_cost, self.boost_level(boost.kind))
    }

    pub fn can_afford_boost(&self, boost: &BoostDefinition) -> bool {
        self.player.balance >= self.boost_cost(boost) as f64
    }

    pub fn buy_boost(&mut self, boost: &BoostDefinition) -> bool {
        if boost.is_daily {
            return match boost.kind {
                BoostKind::Energy => {
                    self.player.refill_energy();
                    debug!(boost = %boost.id, "used daily energy refill");
                    true
                }
                _ => false,
            };
        }
        if boost.kind == BoostKind::Energy {
            return false;
        }

        let cost = self.boost_cost(boost);
        if !self.player.spend(cost) {
            return false;
        }

        let player = &mut self.player;
        match boost.kind {
            BoostKind::Multitap => {
                player.multitap_level += 1;
                player.click_damage += MULTITAP_DAMAGE_STEP;
            }
            BoostKind::Limit => {
                player.energy_limit_level += 1;
                player.max_energy += ENERGY_LIMIT_STEP;
            }
            BoostKind::Regen => {
                player.energy_regen_level += 1;
                player.sync_regen_rate();
            }
            BoostKind::Energy => {}
        }
        debug!(
            boost = %boost.id,
            tier = self.boost_level(boost.kind),
            paid = cost,
            "bought boost"
        );
        true
    }

    /// Advances the level to match the balance. Never lowers it.
    pub fn recompute_level(&mut self) -> bool {
        let reached = self.levels.classify(self.player.balance);
        if reached.level <= self.player.level {
            return false;
        }
        info!(
            from = self.player.level,
            to = reached.level,
            rank = %reached.name,
            "level up"
        );
        self.player.level = reached.level;
        true
    }

    pub fn rank_name(&self) -> &str {
        self.levels.name_for_level(self.player.level)
    }

    pub fn level_progress(&self) -> LevelProgress {
        self.levels.progress(self.player.level, self.player.balance)
    }

    pub fn flag_cheater(&mut self) {
        if !self.player.is_cheater {
            info!("player flagged as cheater");
        }
        self.player.is_cheater = true;
    }

    pub fn connect_wallet(&mut self, address: impl Into<String>) {
        self.player.wallet_address = Some(address.into());
    }

    pub fn disconnect_wallet(&mut self) {
        self.player.wallet_address = None;
    }

    pub fn record_referral(&mut self, referral: Referral) {
        self.player.referrals.push(referral);
    }
}
