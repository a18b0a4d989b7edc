pub const BASE_REGEN_RATE: f64 = 3.0;
pub const MULTITAP_DAMAGE_STEP: u32 = 1;
pub const ENERGY_LIMIT_STEP: u32 = 500;

/// Price of moving a boost from `tier` to `tier + 1`: `base_cost × 2^(tier-1)`.
/// Tiers start at 1; saturates instead of overflowing.
pub fn boost_cost(base_cost: u64, tier: u32) -> u64 {
    let exponent = tier.max(1) - 1;
    let factor = 2u64.checked_pow(exponent).unwrap_or(u64::MAX);
    base_cost.saturating_mul(factor)
}

/// Energy per second at a given regen tier.
pub fn regen_rate_for_level(level: u32) -> f64 {
    BASE_REGEN_RATE + level.saturating_sub(1) as f64
}
