use crate::data::{UpgradeCategory, UpgradeDefinition};

pub const UPGRADE_COST_GROWTH: f64 = 1.5;

/// Cost of the next purchase after `level` purchases: `floor(initial × 1.5^level)`.
///
/// Closed form over the initial cost. Compounding the floored price each
/// purchase (`floor(cost × 1.5)`) drifts from this once the product stops
/// being integral, e.g. 505 vs 506 for an initial cost of 100 at level 4.
pub fn upgrade_cost(initial_cost: u64, level: u32) -> u64 {
    let exponent = i32::try_from(level).unwrap_or(i32::MAX);
    (initial_cost as f64 * UPGRADE_COST_GROWTH.powi(exponent)).floor() as u64
}

#[derive(Debug, Clone, PartialEq)]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: UpgradeCategory,
    pub image: String,
    pub initial_cost: u64,
    pub base_profit: u64,
    pub level: u32,
    pub cost: u64,
    pub current_profit: u64,
}

impl Upgrade {
    pub fn from_definition(definition: &UpgradeDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            description: definition.description.clone(),
            category: definition.category,
            image: definition.image.clone(),
            initial_cost: definition.initial_cost,
            base_profit: definition.base_profit,
            level: 0,
            cost: definition.initial_cost,
            current_profit: 0,
        }
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
        self.cost = upgrade_cost(self.initial_cost, level);
        self.current_profit = self.base_profit.saturating_mul(u64::from(level));
    }

    pub fn level_up(&mut self) {
        self.set_level(self.level.saturating_add(1));
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpgradeSet {
    upgrades: Vec<Upgrade>,
}

impl UpgradeSet {
    pub fn from_definitions(definitions: &[UpgradeDefinition]) -> Self {
        Self {
            upgrades: definitions.iter().map(Upgrade::from_definition).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Upgrade> {
        self.upgrades.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Upgrade> {
        self.upgrades.iter_mut()
    }

    pub fn get(&self, id: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|upgrade| upgrade.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Upgrade> {
        self.upgrades.iter_mut().find(|upgrade| upgrade.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Upgrade> {
        self.upgrades.get(index)
    }

    pub fn in_category(&self, category: UpgradeCategory) -> impl Iterator<Item = &Upgrade> {
        self.upgrades
            .iter()
            .filter(move |upgrade| upgrade.category == category)
    }

    /// Sum of every upgrade's accumulated profit per hour.
    pub fn total_profit_per_hour(&self) -> f64 {
        self.upgrades
            .iter()
            .map(|upgrade| upgrade.current_profit as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{UpgradeSet, upgrade_cost};
    use crate::data::{UpgradeCategory, UpgradeDefinition};

    fn definition(id: &str, category: UpgradeCategory, cost: u64, profit: u64) -> UpgradeDefinition {
        UpgradeDefinition {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category,
            image: String::new(),
            initial_cost: cost,
            base_profit: profit,
        }
    }

    #[test]
    fn cost_follows_closed_form() {
        assert_eq!(upgrade_cost(100, 0), 100);
        assert_eq!(upgrade_cost(100, 1), 150);
        assert_eq!(upgrade_cost(100, 2), 225);
        assert_eq!(upgrade_cost(100, 3), 337);
        assert_eq!(upgrade_cost(100, 4), 506);
        assert_eq!(upgrade_cost(5, 2), 11);
    }

    #[test]
    fn level_up_updates_cost_and_profit() {
        let mut set = UpgradeSet::from_definitions(&[definition(
            "bag",
            UpgradeCategory::Training,
            100,
            15,
        )]);
        let upgrade = set.get_mut("bag").expect("bag exists");

        upgrade.level_up();
        upgrade.level_up();

        assert_eq!(upgrade.level, 2);
        assert_eq!(upgrade.cost, 225);
        assert_eq!(upgrade.current_profit, 30);
        assert_eq!(set.total_profit_per_hour(), 30.0);
    }

    #[test]
    fn category_filter_keeps_catalog_order() {
        let set = UpgradeSet::from_definitions(&[
            definition("a", UpgradeCategory::Gear, 10, 1),
            definition("b", UpgradeCategory::Training, 10, 1),
            definition("c", UpgradeCategory::Gear, 10, 1),
        ]);

        let gear = set
            .in_category(UpgradeCategory::Gear)
            .map(|upgrade| upgrade.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(gear, vec!["a", "c"]);
        assert!(set.get("missing").is_none());
    }
}
