mod bridge;
mod codec;
mod gateway;
mod model;

pub use bridge::{apply_save_data, player_to_save, save_data_from_engine};
pub use codec::{export_to_base64, import_from_base64, load_from_json_string, save_to_json_string};
pub use gateway::{FileGateway, MemoryGateway, PersistenceGateway, sanitize_user_id};
pub use model::{SAVE_VERSION, SaveData, SavePlayer, SaveReferral, SaveUpgrade};

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{
        FileGateway, MemoryGateway, PersistenceGateway, SAVE_VERSION, SaveData, SavePlayer,
        SaveReferral, SaveUpgrade, apply_save_data, export_to_base64, import_from_base64,
        load_from_json_string, sanitize_user_id, save_data_from_engine, save_to_json_string,
    };
    use crate::{ProgressionEngine, bundled_catalog};

    fn sample_save() -> SaveData {
        SaveData {
            version: SAVE_VERSION,
            player: SavePlayer {
                character_name: "Rex".to_string(),
                balance: 12_345.5,
                fame_per_hour: 100.0,
                energy: 640.0,
                max_energy: 1500,
                energy_regen_rate: 4.0,
                click_damage: 3,
                multitap_level: 3,
                energy_limit_level: 2,
                energy_regen_level: 2,
                level: 2,
                is_cheater: false,
                last_sync_time: 1_700_000_000_000,
                wallet_address: Some("EQwallet".to_string()),
                referrals: vec![SaveReferral {
                    id: "77".to_string(),
                    name: "Fang".to_string(),
                    league: "Novice".to_string(),
                    reward: 2500,
                }],
            },
            upgrades: vec![
                SaveUpgrade {
                    id: "heavy_bag".to_string(),
                    level: 2,
                },
                SaveUpgrade {
                    id: "gloves".to_string(),
                    level: 1,
                },
            ],
        }
    }

    fn temp_dir(label: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "fame_clicker_{label}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn save_json_round_trip() {
        let original = sample_save();
        let json = save_to_json_string(&original).expect("save JSON should serialize");
        let restored = load_from_json_string(&json).expect("save JSON should deserialize");

        assert_eq!(restored, original);
    }

    #[test]
    fn save_base64_round_trip() {
        let original = sample_save();
        let encoded = export_to_base64(&original).expect("save should export to base64");
        let restored = import_from_base64(&format!("  {encoded}\n"))
            .expect("save should import from base64");

        assert_eq!(restored, original);
    }

    #[test]
    fn newer_save_versions_are_refused() {
        let json = format!(r#"{{ "version": {} }}"#, SAVE_VERSION + 1);

        assert!(load_from_json_string(&json).is_err());
    }

    #[test]
    fn legacy_fields_decode_leniently() {
        let json = r#"{
            "version": 4,
            "player": { "balance": 50.0, "referrals": 3 }
        }"#;

        let save = load_from_json_string(json).expect("legacy save should parse");

        assert!(save.player.referrals.is_empty());
        assert!(!save.player.is_cheater);
        assert_eq!(save.player.max_energy, 1000);
        assert_eq!(save.player.multitap_level, 1);
        assert_eq!(save.player.balance, 50.0);
    }

    #[test]
    fn engine_bridge_round_trip() {
        let catalog = bundled_catalog().expect("catalog");
        let mut engine = ProgressionEngine::new(&catalog, 0);
        engine.player.balance = 10_000.0;
        assert!(engine.buy_upgrade("heavy_bag"));
        assert!(engine.buy_upgrade("heavy_bag"));
        engine.connect_wallet("EQwallet");

        let save = save_data_from_engine(&engine, 99_000);
        assert_eq!(save.player.last_sync_time, 99_000);

        let mut restored = ProgressionEngine::new(&catalog, 0);
        apply_save_data(&mut restored, &save).expect("apply should succeed");

        assert_eq!(restored.player.balance, engine.player.balance);
        assert_eq!(restored.player.fame_per_hour, 30.0);
        assert_eq!(restored.player.wallet_address.as_deref(), Some("EQwallet"));
        let bag = restored.upgrades.get("heavy_bag").expect("bag");
        assert_eq!(bag.level, 2);
        assert_eq!(bag.cost, 225);
        assert_eq!(bag.current_profit, 30);
    }

    #[test]
    fn apply_skips_unknown_upgrades_and_clamps_energy() {
        let catalog = bundled_catalog().expect("catalog");
        let mut save = sample_save();
        save.player.energy = 99_999.0;
        save.upgrades.push(SaveUpgrade {
            id: "retired_upgrade".to_string(),
            level: 9,
        });

        let mut engine = ProgressionEngine::new(&catalog, 0);
        apply_save_data(&mut engine, &save).expect("apply should succeed");

        assert_eq!(engine.player.energy, 1500.0);
        assert!(engine.upgrades.get("retired_upgrade").is_none());
        assert_eq!(engine.upgrades.get("gloves").map(|u| u.level), Some(1));
        assert_eq!(engine.upgrades.get("jump_rope").map(|u| u.level), Some(0));
    }

    #[test]
    fn apply_rebuilds_income_from_known_upgrades() {
        let catalog = bundled_catalog().expect("catalog");
        let mut engine = ProgressionEngine::new(&catalog, 0);
        engine.player.balance = 1_000.0;
        assert!(engine.buy_upgrade("heavy_bag"));

        let mut save = save_data_from_engine(&engine, 0);
        save.upgrades.push(SaveUpgrade {
            id: "retired_upgrade".to_string(),
            level: 9,
        });
        save.player.fame_per_hour += 4_500.0;

        let mut restored = ProgressionEngine::new(&catalog, 0);
        apply_save_data(&mut restored, &save).expect("apply should succeed");

        assert_eq!(restored.player.fame_per_hour, 15.0);
        assert_eq!(
            restored.player.fame_per_hour,
            restored.upgrades.total_profit_per_hour()
        );
    }

    #[test]
    fn apply_sample_save_income_matches_upgrades() {
        let catalog = bundled_catalog().expect("catalog");
        let mut save = sample_save();
        save.player.fame_per_hour = 0.0;

        let mut engine = ProgressionEngine::new(&catalog, 0);
        apply_save_data(&mut engine, &save).expect("apply should succeed");

        assert_eq!(engine.player.fame_per_hour, 100.0);
    }

    #[test]
    fn file_gateway_round_trip_and_wallet_patch() {
        let dir = temp_dir("gateway");
        let mut gateway = FileGateway::new(&dir);

        assert!(gateway.load("123").expect("load").is_none());
        assert!(!gateway.save_wallet("123", "EQnew").expect("patch"));

        let save = sample_save();
        gateway.save("123", &save).expect("save");
        assert!(gateway.path_for("123").exists());
        assert_eq!(gateway.load("123").expect("load"), Some(save.clone()));

        assert!(gateway.save_wallet("123", "EQnew").expect("patch"));
        let patched = gateway.load("123").expect("load").expect("snapshot");
        assert_eq!(patched.player.wallet_address.as_deref(), Some("EQnew"));
        assert_eq!(patched.player.balance, save.player.balance);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_gateway_keys_by_user() {
        let mut gateway = MemoryGateway::default();
        gateway.save("a", &sample_save()).expect("save");

        assert_eq!(gateway.len(), 1);
        assert!(gateway.load("a").expect("load").is_some());
        assert!(gateway.load("b").expect("load").is_none());
    }

    #[test]
    fn user_ids_are_sanitized_for_file_names() {
        assert_eq!(sanitize_user_id("../etc/passwd"), "_2e_2e_2fetc_2fpasswd");
        assert_eq!(sanitize_user_id("user-42_x"), "user-42_5fx");
        assert_eq!(sanitize_user_id("Rex-7"), "Rex-7");
        assert_eq!(sanitize_user_id(""), "");
    }

    #[test]
    fn similar_user_ids_get_distinct_save_files() {
        let gateway = FileGateway::new("saves");
        let paths = ["a.b", "a b", "a_b", "a_2eb"].map(|id| gateway.path_for(id));

        for (i, left) in paths.iter().enumerate() {
            for right in &paths[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn file_gateway_keeps_colliding_looking_users_apart() {
        let dir = temp_dir("distinct_users");
        let mut gateway = FileGateway::new(&dir);
        let mut first = sample_save();
        first.player.balance = 1.0;
        let mut second = sample_save();
        second.player.balance = 2.0;

        gateway.save("a.b", &first).expect("save");
        gateway.save("a_b", &second).expect("save");

        let loaded = gateway.load("a.b").expect("load").expect("snapshot");
        assert_eq!(loaded.player.balance, 1.0);
        let loaded = gateway.load("a_b").expect("load").expect("snapshot");
        assert_eq!(loaded.player.balance, 2.0);

        let _ = fs::remove_dir_all(&dir);
    }
}
