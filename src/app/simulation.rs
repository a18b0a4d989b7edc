use bevy::prelude::*;
use fame_clicker::{
    CannedAdvisor, PersistenceGateway, advice_or_fallback, generate_leaderboard,
    save_data_from_engine,
};

use super::resources::{GameAction, SessionState, now_millis};

/// Applies queued commands in arrival order. Runs before the tick so a
/// frame's input never interleaves with passive accrual.
pub fn apply_game_actions(mut actions: EventReader<GameAction>, mut session: ResMut<SessionState>) {
    let session = &mut *session;

    for action in actions.read() {
        match *action {
            GameAction::Tap => {
                session.engine.tap(1);
            }
            GameAction::BuyUpgrade(index) => {
                let Some(id) = session
                    .engine
                    .upgrades
                    .get_index(index)
                    .map(|upgrade| upgrade.id.clone())
                else {
                    continue;
                };
                session.engine.buy_upgrade(&id);
            }
            GameAction::BuyBoost(kind) => {
                let Some(boost) = session.catalog.boost_of_kind(kind) else {
                    continue;
                };
                session.engine.buy_boost(boost);
            }
            GameAction::DismissOfflineNotice => {
                session.offline_notice = None;
            }
            GameAction::RequestAdvice => {
                let advice = advice_or_fallback(
                    &mut CannedAdvisor,
                    session.engine.rank_name(),
                    session.engine.player.fame_per_hour,
                );
                session.advice = Some(advice);
            }
            GameAction::ShowLeaderboard => {
                session.leaderboard =
                    generate_leaderboard(&session.engine.player, &mut rand::rng());
            }
        }
    }
}

pub fn tick_engine(time: Res<Time>, mut session: ResMut<SessionState>) {
    let steps = session
        .tick_timer
        .tick(time.delta())
        .times_finished_this_tick();
    let step_seconds = session.tick_timer.duration().as_secs_f64();

    for _ in 0..steps {
        session.engine.tick(step_seconds);
    }
}

pub fn autosave_session(time: Res<Time>, mut session: ResMut<SessionState>) {
    if !session.autosave_timer.tick(time.delta()).just_finished() {
        return;
    }
    persist(&mut session);
}

pub fn save_on_exit(mut exits: EventReader<AppExit>, session: Option<ResMut<SessionState>>) {
    if exits.read().next().is_none() {
        return;
    }
    if let Some(mut session) = session {
        persist(&mut session);
    }
}

fn persist(session: &mut SessionState) {
    let save = save_data_from_engine(&session.engine, now_millis());
    match session.gateway.save(&session.identity.user_id, &save) {
        Ok(()) => session.last_save_error = None,
        Err(err) => {
            error!("saving progress failed: {err:#}");
            session.last_save_error = Some(format!("{err:#}"));
        }
    }
}
