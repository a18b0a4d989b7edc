use anyhow::Result;
use tracing::info;

use crate::save::{PersistenceGateway, SaveReferral};

/// Reward shown next to each invited friend.
pub const REFERRAL_REWARD: u64 = 2_500;

pub trait ReferralChannel {
    /// Credits `referrer_id` with a newly joined user. Returns `false` when
    /// nothing was recorded (unknown referrer, repeat join).
    fn record(&mut self, referrer_id: &str, new_user_id: &str, new_user_name: &str)
    -> Result<bool>;
}

/// Appends the referral to the referrer's stored snapshot, so it shows up
/// the next time they load.
pub struct GatewayReferralChannel<'a, G> {
    gateway: &'a mut G,
    league: String,
}

impl<'a, G: PersistenceGateway> GatewayReferralChannel<'a, G> {
    pub fn new(gateway: &'a mut G, league: impl Into<String>) -> Self {
        Self {
            gateway,
            league: league.into(),
        }
    }
}

impl<G: PersistenceGateway> ReferralChannel for GatewayReferralChannel<'_, G> {
    fn record(
        &mut self,
        referrer_id: &str,
        new_user_id: &str,
        new_user_name: &str,
    ) -> Result<bool> {
        let Some(mut save) = self.gateway.load(referrer_id)? else {
            return Ok(false);
        };
        if save
            .player
            .referrals
            .iter()
            .any(|referral| referral.id == new_user_id)
        {
            return Ok(false);
        }

        save.player.referrals.push(SaveReferral {
            id: new_user_id.to_string(),
            name: new_user_name.to_string(),
            league: self.league.clone(),
            reward: REFERRAL_REWARD,
        });
        self.gateway.save(referrer_id, &save)?;
        info!(
            referrer = referrer_id,
            user = new_user_id,
            "recorded referral"
        );
        Ok(true)
    }
}
