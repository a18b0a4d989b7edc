use rand::Rng;

use crate::core::PlayerState;

pub const LEADERBOARD_SIZE: usize = 50;
const TOP_RIVALS: usize = 3;
const TOP_RIVAL_FLOOR: f64 = 100_000_000.0;
const TOP_RIVAL_SPREAD: f64 = 50_000_000.0;
const RIVAL_MIN_BALANCE: f64 = 1_000.0;

const RIVAL_NAMES: &[&str] = &[
    "Alexei_Crypto",
    "Dimon_Ton",
    "Satoshi_Nakamoto",
    "Olga_Trade",
    "Ivan_Pro",
    "CryptoWolf",
    "Ton_Holder_777",
    "Masha_Gem",
    "Vlad_Bitcoin",
    "Sergey_Dev",
    "Anna_Moon",
    "Durovs_Fan",
    "Notcoin_Killer",
    "Hamster_Boss",
    "Furry_King",
];

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub balance: f64,
    pub is_cheater: bool,
    pub is_current_player: bool,
}

/// Ranks the player against a field of generated rivals. The first few
/// rivals are far ahead; the rest hover around the player's balance.
pub fn generate_leaderboard<R: Rng + ?Sized>(
    player: &PlayerState,
    rng: &mut R,
) -> Vec<LeaderboardEntry> {
    let mut entries = RIVAL_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let roll: f64 = rng.random();
            let balance = if index < TOP_RIVALS {
                TOP_RIVAL_FLOOR + roll * TOP_RIVAL_SPREAD
            } else {
                (player.balance * (roll * 2.0 + 0.5)).max(RIVAL_MIN_BALANCE)
            };
            LeaderboardEntry {
                rank: 0,
                name: (*name).to_string(),
                balance: balance.floor(),
                is_cheater: false,
                is_current_player: false,
            }
        })
        .collect::<Vec<_>>();

    entries.push(LeaderboardEntry {
        rank: 0,
        name: player.character_name.clone(),
        balance: player.balance,
        is_cheater: player.is_cheater,
        is_current_player: true,
    });

    entries.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    entries.truncate(LEADERBOARD_SIZE);
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    entries
}
