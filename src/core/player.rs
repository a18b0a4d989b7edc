use crate::data::StartingPlayer;

use super::boosts::regen_rate_for_level;

#[derive(Debug, Clone, PartialEq)]
pub struct Referral {
    pub id: String,
    pub name: String,
    pub league: String,
    pub reward: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
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
    /// Milliseconds since the Unix epoch.
    pub last_sync_time: u64,
    pub wallet_address: Option<String>,
    pub referrals: Vec<Referral>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::fresh(&StartingPlayer::default(), 0)
    }
}

impl PlayerState {
    pub fn fresh(start: &StartingPlayer, now_ms: u64) -> Self {
        let max_energy = start.max_energy.max(1);
        Self {
            character_name: start.character_name.clone(),
            balance: start.balance.max(0.0),
            fame_per_hour: 0.0,
            energy: start.energy.clamp(0.0, max_energy as f64),
            max_energy,
            energy_regen_rate: regen_rate_for_level(1),
            click_damage: start.click_damage.max(1),
            multitap_level: 1,
            energy_limit_level: 1,
            energy_regen_level: 1,
            level: 1,
            is_cheater: false,
            last_sync_time: now_ms,
            wallet_address: None,
            referrals: Vec::new(),
        }
    }

    pub fn credit(&mut self, amount: f64) {
        if !(amount > 0.0) {
            return;
        }
        self.balance += amount;
    }

    /// Deducts `cost` if the balance covers it. Returns whether it did.
    pub fn spend(&mut self, cost: u64) -> bool {
        let cost = cost as f64;
        if self.balance < cost {
            return false;
        }
        self.balance = (self.balance - cost).max(0.0);
        true
    }

    pub fn restore_energy(&mut self, amount: f64) {
        if !(amount > 0.0) {
            return;
        }
        self.energy = (self.energy + amount).min(self.max_energy as f64);
    }

    pub fn refill_energy(&mut self) {
        self.energy = self.max_energy as f64;
    }

    /// Consumes one unit of energy if at least one is available.
    pub fn consume_energy(&mut self) -> bool {
        if self.energy < 1.0 {
            return false;
        }
        self.energy -= 1.0;
        true
    }

    pub fn sync_regen_rate(&mut self) {
        self.energy_regen_rate = regen_rate_for_level(self.energy_regen_level);
    }

    /// Pulls every field back inside its legal range. Used after loading a
    /// snapshot that may have been edited or written by an older build.
    pub fn normalize(&mut self) {
        self.max_energy = self.max_energy.max(1);
        self.click_damage = self.click_damage.max(1);
        self.multitap_level = self.multitap_level.max(1);
        self.energy_limit_level = self.energy_limit_level.max(1);
        self.energy_regen_level = self.energy_regen_level.max(1);
        self.level = self.level.max(1);
        if !self.balance.is_finite() || self.balance < 0.0 {
            self.balance = 0.0;
        }
        if !self.fame_per_hour.is_finite() || self.fame_per_hour < 0.0 {
            self.fame_per_hour = 0.0;
        }
        if !self.energy.is_finite() {
            self.energy = 0.0;
        }
        self.energy = self.energy.clamp(0.0, self.max_energy as f64);
        self.sync_regen_rate();
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerState;

    #[test]
    fn spend_rejects_unaffordable_cost() {
        let mut player = PlayerState {
            balance: 99.0,
            ..PlayerState::default()
        };

        assert!(!player.spend(100));
        assert_eq!(player.balance, 99.0);
        assert!(player.spend(99));
        assert_eq!(player.balance, 0.0);
    }

    #[test]
    fn restore_energy_clamps_to_capacity() {
        let mut player = PlayerState {
            energy: 990.0,
            max_energy: 1000,
            ..PlayerState::default()
        };

        player.restore_energy(50.0);
        assert_eq!(player.energy, 1000.0);

        player.restore_energy(f64::NAN);
        assert_eq!(player.energy, 1000.0);
    }

    #[test]
    fn consume_energy_needs_a_whole_unit() {
        let mut player = PlayerState {
            energy: 0.5,
            ..PlayerState::default()
        };

        assert!(!player.consume_energy());
        assert_eq!(player.energy, 0.5);
    }

    #[test]
    fn normalize_repairs_out_of_range_fields() {
        let mut player = PlayerState {
            balance: -4.0,
            energy: 5000.0,
            max_energy: 0,
            energy_regen_level: 0,
            level: 0,
            ..PlayerState::default()
        };

        player.normalize();

        assert_eq!(player.balance, 0.0);
        assert_eq!(player.max_energy, 1);
        assert_eq!(player.energy, 1.0);
        assert_eq!(player.energy_regen_level, 1);
        assert_eq!(player.energy_regen_rate, 3.0);
        assert_eq!(player.level, 1);
    }
}
