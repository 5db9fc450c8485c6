//! Game constants

/// Wrong guesses allowed before a round is lost
pub const MAX_WRONG: u8 = 6;

/// Points awarded for a won round
pub const POINTS_PER_WIN: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_wrong: u8,
    pub points_per_win: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_wrong: MAX_WRONG,
            points_per_win: POINTS_PER_WIN,
        }
    }
}
