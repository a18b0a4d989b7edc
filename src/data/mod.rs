mod catalog;
mod loader;

pub use catalog::{
    BoostDefinition, BoostKind, Catalog, LevelThreshold, StartingPlayer, UpgradeCategory,
    UpgradeDefinition,
};
pub use loader::{bundled_catalog, load_catalog_from_path, parse_catalog, read_json_file};

#[cfg(test)]
mod tests {
    use super::{BoostKind, UpgradeCategory, bundled_catalog, parse_catalog};

    #[test]
    fn bundled_catalog_has_entries() {
        let catalog = bundled_catalog().expect("bundled catalog should load");

        assert!(!catalog.upgrades.is_empty(), "catalog should list upgrades");
        assert!(!catalog.levels.is_empty(), "catalog should list levels");
        assert_eq!(catalog.levels[0].threshold, 0);
        assert_eq!(catalog.levels[0].level, 1);
    }

    #[test]
    fn bundled_catalog_covers_every_boost_kind() {
        let catalog = bundled_catalog().expect("bundled catalog should load");

        for kind in [
            BoostKind::Energy,
            BoostKind::Multitap,
            BoostKind::Limit,
            BoostKind::Regen,
        ] {
            assert!(catalog.boost_of_kind(kind).is_some(), "missing {kind:?} boost");
        }
        let daily = catalog.daily_boosts().collect::<Vec<_>>();
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].kind, BoostKind::Energy);
    }

    #[test]
    fn boosts_split_into_daily_and_upgradeable() {
        let catalog = bundled_catalog().expect("bundled catalog should load");

        let upgradeable = catalog
            .upgradeable_boosts()
            .map(|boost| boost.kind)
            .collect::<Vec<_>>();
        assert_eq!(
            upgradeable,
            vec![BoostKind::Multitap, BoostKind::Limit, BoostKind::Regen]
        );
        assert_eq!(
            catalog.daily_boosts().count() + upgradeable.len(),
            catalog.boosts.len()
        );
    }

    #[test]
    fn every_bundled_upgrade_falls_in_a_listed_category() {
        let catalog = bundled_catalog().expect("bundled catalog should load");

        for upgrade in &catalog.upgrades {
            assert!(
                UpgradeCategory::all().contains(&upgrade.category),
                "{} has an unlisted category",
                upgrade.id
            );
        }
        for category in UpgradeCategory::all() {
            assert!(
                catalog.upgrades.iter().any(|u| u.category == *category),
                "no upgrade in {}",
                category.label()
            );
        }
    }

    #[test]
    fn unsorted_level_table_is_rejected() {
        let json = r#"{
            "levels": [
                { "threshold": 0, "level": 1, "name": "A" },
                { "threshold": 500, "level": 3, "name": "C" },
                { "threshold": 100, "level": 2, "name": "B" }
            ]
        }"#;

        let err = parse_catalog(json, "test catalog").expect_err("should reject");
        assert!(format!("{err:#}").contains("must ascend"), "got: {err:#}");
    }

    #[test]
    fn duplicate_upgrade_ids_are_rejected() {
        let json = r#"{
            "levels": [{ "threshold": 0, "level": 1, "name": "A" }],
            "upgrades": [
                { "id": "bag", "name": "Bag", "category": "training", "initial_cost": 10, "base_profit": 1 },
                { "id": "bag", "name": "Bag 2", "category": "gear", "initial_cost": 20, "base_profit": 2 }
            ]
        }"#;

        let err = parse_catalog(json, "test catalog").expect_err("should reject");
        assert!(format!("{err:#}").contains("duplicate upgrade id"), "got: {err:#}");
    }

    #[test]
    fn missing_base_level_is_rejected() {
        let json = r#"{ "levels": [{ "threshold": 10, "level": 1, "name": "A" }] }"#;

        assert!(parse_catalog(json, "test catalog").is_err());
    }
}
