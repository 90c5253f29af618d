use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two sides of the game. `Me` is the side the companion advises
/// (the human in training mode); `Opponent` is the side the engine plays in
/// training mode.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Me = 0,
    Opponent = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Me, Player::Opponent];

    pub fn opposite(&self) -> Self {
        match self {
            Player::Me => Player::Opponent,
            Player::Opponent => Player::Me,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::Me)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Me => "me",
            Player::Opponent => "opponent",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "me" | "self" => Ok(Player::Me),
            "opponent" | "ai" => Ok(Player::Opponent),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: me, opponent, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Player::ALL.contains(&Player::random()));
    }

    #[test]
    fn test_parse_me() {
        assert_eq!(Player::Me, Player::from_str("me").unwrap());
        assert_eq!(Player::Me, Player::from_str("self").unwrap());
    }

    #[test]
    fn test_parse_opponent() {
        assert_eq!(Player::Opponent, Player::from_str("opponent").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Player::from_str("white").is_err());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Player::Me.opposite(), Player::Opponent);
        assert_eq!(Player::Opponent.opposite(), Player::Me);
    }
}
