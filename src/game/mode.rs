use std::fmt;
use std::str::FromStr;

/// Who decides the opponent's moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The opponent's moves are entered by hand, mirroring a game played
    /// elsewhere; the engine only suggests moves for the self side.
    #[default]
    Companion,
    /// The engine plays the opponent side.
    Training,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Companion => write!(f, "companion"),
            Mode::Training => write!(f, "training"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "companion" => Ok(Mode::Companion),
            "training" => Ok(Mode::Training),
            _ => Err(format!(
                "invalid mode '{}', expected 'companion' or 'training'",
                s
            )),
        }
    }
}
