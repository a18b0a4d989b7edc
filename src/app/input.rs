use bevy::prelude::*;
use fame_clicker::BoostKind;

use super::resources::GameAction;

const UPGRADE_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const BOOST_KEYS: [(KeyCode, BoostKind); 4] = [
    (KeyCode::KeyE, BoostKind::Energy),
    (KeyCode::KeyM, BoostKind::Multitap),
    (KeyCode::KeyL, BoostKind::Limit),
    (KeyCode::KeyR, BoostKind::Regen),
];

/// Every press and every new touch point is its own tap.
pub fn emit_tap_actions(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut actions: EventWriter<GameAction>,
) {
    if keys.just_pressed(KeyCode::Space) {
        actions.send(GameAction::Tap);
    }
    if buttons.just_pressed(MouseButton::Left) {
        actions.send(GameAction::Tap);
    }
    for _ in touches.iter_just_pressed() {
        actions.send(GameAction::Tap);
    }
}

pub fn emit_shop_actions(keys: Res<ButtonInput<KeyCode>>, mut actions: EventWriter<GameAction>) {
    for (index, key) in UPGRADE_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            actions.send(GameAction::BuyUpgrade(index));
        }
    }

    for (key, kind) in BOOST_KEYS {
        if keys.just_pressed(key) {
            actions.send(GameAction::BuyBoost(kind));
        }
    }

    if keys.just_pressed(KeyCode::Enter) {
        actions.send(GameAction::DismissOfflineNotice);
    }
    if keys.just_pressed(KeyCode::KeyA) {
        actions.send(GameAction::RequestAdvice);
    }
    if keys.just_pressed(KeyCode::KeyT) {
        actions.send(GameAction::ShowLeaderboard);
    }
}
