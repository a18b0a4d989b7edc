use anyhow::{Result, ensure};
use tracing::warn;

use crate::core::{CheatDetector, PlayerState, ProgressionEngine, Referral};

use super::{SAVE_VERSION, SaveData, SavePlayer, SaveReferral, SaveUpgrade};

pub fn player_to_save(player: &PlayerState) -> SavePlayer {
    SavePlayer {
        character_name: player.character_name.clone(),
        balance: player.balance,
        fame_per_hour: player.fame_per_hour,
        energy: player.energy,
        max_energy: player.max_energy,
        energy_regen_rate: player.energy_regen_rate,
        click_damage: player.click_damage,
        multitap_level: player.multitap_level,
        energy_limit_level: player.energy_limit_level,
        energy_regen_level: player.energy_regen_level,
        level: player.level,
        is_cheater: player.is_cheater,
        last_sync_time: player.last_sync_time,
        wallet_address: player.wallet_address.clone(),
        referrals: player
            .referrals
            .iter()
            .map(|referral| SaveReferral {
                id: referral.id.clone(),
                name: referral.name.clone(),
                league: referral.league.clone(),
                reward: referral.reward,
            })
            .collect(),
    }
}

fn player_from_save(save: &SavePlayer) -> PlayerState {
    PlayerState {
        character_name: save.character_name.clone(),
        balance: save.balance,
        fame_per_hour: save.fame_per_hour,
        energy: save.energy,
        max_energy: save.max_energy,
        energy_regen_rate: save.energy_regen_rate,
        click_damage: save.click_damage,
        multitap_level: save.multitap_level,
        energy_limit_level: save.energy_limit_level,
        energy_regen_level: save.energy_regen_level,
        level: save.level,
        is_cheater: save.is_cheater,
        last_sync_time: save.last_sync_time,
        wallet_address: save.wallet_address.clone(),
        referrals: save
            .referrals
            .iter()
            .map(|referral| Referral {
                id: referral.id.clone(),
                name: referral.name.clone(),
                league: referral.league.clone(),
                reward: referral.reward,
            })
            .collect(),
    }
}

/// Snapshot of the engine, stamped as synced at `now_ms`.
pub fn save_data_from_engine<D: CheatDetector>(
    engine: &ProgressionEngine<D>,
    now_ms: u64,
) -> SaveData {
    let mut player = player_to_save(&engine.player);
    player.last_sync_time = now_ms;

    SaveData {
        version: SAVE_VERSION,
        player,
        upgrades: engine
            .upgrades
            .iter()
            .map(|upgrade| SaveUpgrade {
                id: upgrade.id.clone(),
                level: upgrade.level,
            })
            .collect(),
    }
}

/// Restores a snapshot onto an engine built from the current catalog.
/// Upgrade names and base numbers come from the catalog; only levels are
/// taken from the snapshot. Hourly income is rebuilt from the restored
/// upgrades rather than trusted from the snapshot.
pub fn apply_save_data<D: CheatDetector>(
    engine: &mut ProgressionEngine<D>,
    save: &SaveData,
) -> Result<()> {
    ensure!(
        save.version <= SAVE_VERSION,
        "save version {} is newer than supported version {SAVE_VERSION}",
        save.version
    );

    let mut player = player_from_save(&save.player);
    player.normalize();
    engine.player = player;

    for upgrade in engine.upgrades.iter_mut() {
        upgrade.set_level(0);
    }
    for entry in &save.upgrades {
        match engine.upgrades.get_mut(&entry.id) {
            Some(upgrade) => upgrade.set_level(entry.level),
            None => warn!(upgrade = %entry.id, "skipping unknown upgrade in save"),
        }
    }
    engine.player.fame_per_hour = engine.upgrades.total_profit_per_hour();

    engine.recompute_level();
    Ok(())
}
