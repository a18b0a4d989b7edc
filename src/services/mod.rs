mod advisor;
mod identity;
mod leaderboard;
mod referral;

pub use advisor::{Advisor, CannedAdvisor, FALLBACK_ADVICE, advice_or_fallback};
pub use identity::{Identity, REFERRAL_PREFIX};
pub use leaderboard::{LEADERBOARD_SIZE, LeaderboardEntry, generate_leaderboard};
pub use referral::{GatewayReferralChannel, REFERRAL_REWARD, ReferralChannel};
