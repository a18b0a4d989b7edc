use bevy::prelude::*;
use fame_clicker::{
    Catalog, FileGateway, GatewayReferralChannel, Identity, PersistenceGateway, ProgressionEngine,
    ReferralChannel, apply_save_data, bundled_catalog, load_catalog_from_path,
};

use super::resources::{RuntimeConfig, SessionState, now_millis};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    mut next_phase: ResMut<NextState<AppPhase>>,
    mut exit: EventWriter<AppExit>,
) {
    let config = load_runtime_config();
    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("failed loading catalog: {err:#}");
            exit.send(AppExit::error());
            return;
        }
    };

    let identity = Identity::resolve(
        config.user_id.clone(),
        config.display_name.clone(),
        &config.admin_usernames,
    );
    let mut gateway = FileGateway::new(&config.save_dir);
    let now = now_millis();

    let mut engine = ProgressionEngine::new(&catalog, now);
    match gateway.load(&identity.user_id) {
        Ok(Some(save)) => {
            if let Err(err) = apply_save_data(&mut engine, &save) {
                warn!("discarding save for '{}': {err:#}", identity.user_id);
                engine = ProgressionEngine::new(&catalog, now);
            } else {
                info!("loaded save for '{}'", identity.user_id);
            }
        }
        Ok(None) => info!("no save for '{}', starting fresh", identity.user_id),
        Err(err) => warn!("failed loading save for '{}': {err:#}", identity.user_id),
    }
    identity.adopt_display_name(&mut engine.player, &catalog.starting_player.character_name);

    let elapsed = engine.elapsed_since_sync(now);
    let report = engine.reconcile_offline(elapsed, now);
    let offline_notice = (report.earned > 0).then_some(report);

    let referred_by = config
        .start_param
        .as_deref()
        .and_then(|param| identity.referrer_from_start_param(param))
        .map(str::to_string);
    if let Some(referrer) = &referred_by {
        let league = engine.levels().entries()[0].name.clone();
        let name = identity
            .display_name
            .clone()
            .unwrap_or_else(|| engine.player.character_name.clone());
        let mut channel = GatewayReferralChannel::new(&mut gateway, league);
        match channel.record(referrer, &identity.user_id, &name) {
            Ok(true) => info!("joined via referrer '{referrer}'"),
            Ok(false) => info!("referrer '{referrer}' was not credited"),
            Err(err) => warn!("failed recording referral from '{referrer}': {err:#}"),
        }
    }

    if identity.is_admin {
        info!("admin session for '{}'", identity.user_id);
    }

    commands.insert_resource(SessionState {
        engine,
        catalog,
        identity,
        gateway,
        tick_timer: Timer::from_seconds(config.tick_seconds.max(0.05), TimerMode::Repeating),
        autosave_timer: Timer::from_seconds(
            config.auto_save_interval_seconds.max(1.0),
            TimerMode::Repeating,
        ),
        last_save_error: None,
        offline_notice,
        advice: None,
        leaderboard: Vec::new(),
        referred_by,
    });
    commands.insert_resource(config);

    next_phase.set(AppPhase::InGame);
}

fn load_runtime_config() -> RuntimeConfig {
    let path = RuntimeConfig::config_path();
    match RuntimeConfig::load(&path) {
        Ok(Some(config)) => {
            info!("loaded runtime config from {}", path.display());
            config
        }
        Ok(None) => RuntimeConfig::default(),
        Err(err) => {
            error!("ignoring runtime config: {err:#}");
            RuntimeConfig::default()
        }
    }
}

fn load_catalog(config: &RuntimeConfig) -> anyhow::Result<Catalog> {
    let Some(path) = &config.catalog_path else {
        return bundled_catalog();
    };
    match load_catalog_from_path(path) {
        Ok(catalog) => Ok(catalog),
        Err(err) => {
            warn!("falling back to bundled catalog: {err:#}");
            bundled_catalog()
        }
    }
}
