//! The two players and whose turn it is

use std::fmt;

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerSlot {
    #[default]
    One,
    Two,
}

impl PlayerSlot {
    /// The opposing slot
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// 1 or 2, as shown to players
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self { name, score: 0 }
    }
}

/// Both players of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    one: Player,
    two: Player,
}

impl Players {
    #[must_use]
    pub const fn new(one: Player, two: Player) -> Self {
        Self { one, two }
    }

    #[must_use]
    pub const fn get(&self, slot: PlayerSlot) -> &Player {
        match slot {
            PlayerSlot::One => &self.one,
            PlayerSlot::Two => &self.two,
        }
    }

    pub const fn get_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        match slot {
            PlayerSlot::One => &mut self.one,
            PlayerSlot::Two => &mut self.two,
        }
    }

    /// Both players with their slots, player 1 first
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &Player)> {
        [(PlayerSlot::One, &self.one), (PlayerSlot::Two, &self.two)].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_slot_alternates() {
        assert_eq!(PlayerSlot::One.other(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::Two.other(), PlayerSlot::One);
        assert_eq!(PlayerSlot::One.other().other(), PlayerSlot::One);
    }

    #[test]
    fn players_lookup_by_slot() {
        let mut players = Players::new(
            Player::new("Ana".to_string()),
            Player::new("Ben".to_string()),
        );
        players.get_mut(PlayerSlot::Two).score += 10;

        assert_eq!(players.get(PlayerSlot::One).name, "Ana");
        assert_eq!(players.get(PlayerSlot::Two).score, 10);

        let names: Vec<_> = players.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Ben"]);
    }

    #[test]
    fn slot_display() {
        assert_eq!(PlayerSlot::Two.to_string(), "Player 2");
    }
}
