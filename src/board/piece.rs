use super::player::Player;
use std::fmt;

/// Piece sizes, ordered so that a larger size may be stacked on a smaller one.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum Size {
    Small = 1,
    Medium = 2,
    Large = 3,
}

/// Sizes in move generation order: largest first.
pub const SIZES_DESCENDING: [Size; 3] = [Size::Large, Size::Medium, Size::Small];

pub const ALL_SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

impl Size {
    pub fn index(&self) -> usize {
        *self as usize - 1
    }

    pub fn to_char(&self) -> char {
        match self {
            Size::Small => 'S',
            Size::Medium => 'M',
            Size::Large => 'L',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Size::Small),
            'M' => Some(Size::Medium),
            'L' => Some(Size::Large),
            _ => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size_str = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        write!(f, "{}", size_str)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub owner: Player,
    pub size: Size,
}

impl Piece {
    pub fn new(owner: Player, size: Size) -> Self {
        Self { owner, size }
    }

    /// Uppercase letters are the self side's pieces, lowercase the opponent's.
    pub fn to_char(&self) -> char {
        let c = self.size.to_char();
        match self.owner {
            Player::Me => c,
            Player::Opponent => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let size = Size::from_char(c)?;
        let owner = if c.is_ascii_uppercase() {
            Player::Me
        } else {
            Player::Opponent
        };
        Some(Self::new(owner, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_are_totally_ordered() {
        assert!(Size::Small < Size::Medium);
        assert!(Size::Medium < Size::Large);
    }

    #[test]
    fn test_piece_chars() {
        assert_eq!(Piece::new(Player::Me, Size::Large).to_char(), 'L');
        assert_eq!(Piece::new(Player::Opponent, Size::Small).to_char(), 's');
        assert_eq!(
            Piece::from_char('m'),
            Some(Piece::new(Player::Opponent, Size::Medium))
        );
        assert_eq!(Piece::from_char('x'), None);
    }
}
