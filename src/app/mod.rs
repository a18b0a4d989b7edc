mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

use resources::GameAction;
use state::AppPhase;

pub struct FameClickerAppPlugin;

impl Plugin for FameClickerAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .add_event::<GameAction>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::spawn_hud)
            .add_systems(
                Update,
                (
                    input::emit_tap_actions,
                    input::emit_shop_actions,
                    simulation::apply_game_actions,
                    simulation::tick_engine,
                    simulation::autosave_session,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            )
            .add_systems(Last, simulation::save_on_exit);
    }
}
