use super::player::PlayerState;

/// Decides whether a burst of taps looks automated. Consulted before every
/// tap command; a `true` answer marks the player permanently.
pub trait CheatDetector {
    fn inspect_tap(&mut self, player: &PlayerState, count: u32) -> bool;
}

/// Never flags anyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCheatDetection;

impl CheatDetector for NoCheatDetection {
    fn inspect_tap(&mut self, _player: &PlayerState, _count: u32) -> bool {
        false
    }
}
