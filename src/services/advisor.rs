use anyhow::Result;
use tracing::warn;

pub const FALLBACK_ADVICE: &str = "Keep your guard up and keep swinging!";

/// Produces a short coaching line for a rank and income.
pub trait Advisor {
    fn advise(&mut self, rank_name: &str, fame_per_hour: f64) -> Result<String>;
}

/// Never fails: any advisor error is logged and replaced by a stock line.
pub fn advice_or_fallback(advisor: &mut dyn Advisor, rank_name: &str, fame_per_hour: f64) -> String {
    match advisor.advise(rank_name, fame_per_hour) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => FALLBACK_ADVICE.to_string(),
        Err(err) => {
            warn!("advisor failed: {err:#}");
            FALLBACK_ADVICE.to_string()
        }
    }
}

const TIPS: &[&str] = &[
    "Short taps, steady breath. Energy comes back faster than you think.",
    "Gear wins rounds, training wins careers. Buy the cheap upgrades first.",
    "A bigger tank means longer combos. Consider the energy limit boost.",
    "Let the team work while you sleep. Income keeps flowing offline.",
    "Champions are built one tap at a time. Back to the bag!",
];

/// Local advisor picking a tip from the rank and income, so the same
/// situation always gets the same line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAdvisor;

impl Advisor for CannedAdvisor {
    fn advise(&mut self, rank_name: &str, fame_per_hour: f64) -> Result<String> {
        if fame_per_hour <= 0.0 {
            return Ok(format!(
                "{rank_name}, nobody pays a fighter who doesn't train. Buy your first upgrade."
            ));
        }
        let seed = rank_name
            .bytes()
            .fold(fame_per_hour as u64, |acc, byte| acc.wrapping_add(u64::from(byte)));
        let tip = TIPS[(seed % TIPS.len() as u64) as usize];
        Ok(format!("{rank_name}: {tip}"))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};

    use super::{Advisor, CannedAdvisor, FALLBACK_ADVICE, advice_or_fallback};

    struct Offline;

    impl Advisor for Offline {
        fn advise(&mut self, _rank_name: &str, _fame_per_hour: f64) -> Result<String> {
            bail!("connection refused")
        }
    }

    #[test]
    fn failures_fall_back_to_stock_advice() {
        assert_eq!(advice_or_fallback(&mut Offline, "Novice", 10.0), FALLBACK_ADVICE);
    }

    #[test]
    fn canned_advice_is_deterministic() {
        let mut advisor = CannedAdvisor;
        let first = advice_or_fallback(&mut advisor, "Brawler", 420.0);
        let second = advice_or_fallback(&mut advisor, "Brawler", 420.0);

        assert_eq!(first, second);
        assert!(first.starts_with("Brawler"));
    }

    #[test]
    fn idle_players_are_told_to_buy_an_upgrade() {
        let text = advice_or_fallback(&mut CannedAdvisor, "Novice", 0.0);

        assert!(text.contains("first upgrade"), "got: {text}");
    }
}
