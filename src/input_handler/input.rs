//! Interactive command parsing.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::piece::Size;
use crate::board::player::Player;

static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([SMLsml])\\s*([0-8])$").expect("PLACE_RE regex should be valid")
});
static SELECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([SMLsml])$").expect("SELECT_RE regex should be valid"));
static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([0-8])$").expect("CELL_RE regex should be valid"));
static AUTO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^auto\\s+(on|off)$").expect("AUTO_RE regex should be valid"));
static NEW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^new(?:\\s+(me|opponent|random))?$").expect("NEW_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandInput {
    /// Select a piece size and place it in one go, e.g. `L4`.
    Place { size: Size, cell: usize },
    /// Select a piece size for a later cell choice, e.g. `m`.
    Select { size: Size },
    /// Place the selected piece on a cell, e.g. `4`.
    Cell { cell: usize },
    Suggest,
    AutoSuggest { enabled: bool },
    NewGame { first: Option<Player> },
    Reset,
    Quit,
}

fn parse_size(s: &str) -> Result<Size, InputError> {
    s.chars()
        .next()
        .and_then(Size::from_char)
        .ok_or_else(|| InputError::InvalidInput {
            input: s.to_string(),
        })
}

fn parse_cell(s: &str) -> Result<usize, InputError> {
    s.parse().map_err(|_| InputError::InvalidInput {
        input: s.to_string(),
    })
}

impl FromStr for CommandInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let lowered = trimmed.to_lowercase();

        match lowered.as_str() {
            "suggest" | "hint" | "?" => return Ok(CommandInput::Suggest),
            "reset" => return Ok(CommandInput::Reset),
            "quit" | "q" | "exit" => return Ok(CommandInput::Quit),
            _ => {}
        }

        if let Some(caps) = PLACE_RE.captures(trimmed) {
            return Ok(CommandInput::Place {
                size: parse_size(&caps[1])?,
                cell: parse_cell(&caps[2])?,
            });
        }

        if let Some(caps) = SELECT_RE.captures(trimmed) {
            return Ok(CommandInput::Select {
                size: parse_size(&caps[1])?,
            });
        }

        if let Some(caps) = CELL_RE.captures(trimmed) {
            return Ok(CommandInput::Cell {
                cell: parse_cell(&caps[1])?,
            });
        }

        if let Some(caps) = AUTO_RE.captures(&lowered) {
            return Ok(CommandInput::AutoSuggest {
                enabled: &caps[1] == "on",
            });
        }

        if let Some(caps) = NEW_RE.captures(&lowered) {
            let first = match caps.get(1) {
                Some(m) => Some(m.as_str().parse().map_err(|_| InputError::InvalidInput {
                    input: input.to_string(),
                })?),
                None => None,
            };
            return Ok(CommandInput::NewGame { first });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one command from stdin. Returns `Quit` at end of input.
pub fn parse_command_input() -> Result<CommandInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Ok(CommandInput::Quit);
    }

    input.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        assert_eq!(
            "L4".parse::<CommandInput>().unwrap(),
            CommandInput::Place {
                size: Size::Large,
                cell: 4
            }
        );
        assert_eq!(
            "s 0".parse::<CommandInput>().unwrap(),
            CommandInput::Place {
                size: Size::Small,
                cell: 0
            }
        );
    }

    #[test]
    fn test_parse_select_then_cell() {
        assert_eq!(
            "m".parse::<CommandInput>().unwrap(),
            CommandInput::Select { size: Size::Medium }
        );
        assert_eq!(
            "7".parse::<CommandInput>().unwrap(),
            CommandInput::Cell { cell: 7 }
        );
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!(
            "hint".parse::<CommandInput>().unwrap(),
            CommandInput::Suggest
        );
        assert_eq!(
            "auto on".parse::<CommandInput>().unwrap(),
            CommandInput::AutoSuggest { enabled: true }
        );
        assert_eq!(
            "Auto Off".parse::<CommandInput>().unwrap(),
            CommandInput::AutoSuggest { enabled: false }
        );
        assert_eq!(
            "new opponent".parse::<CommandInput>().unwrap(),
            CommandInput::NewGame {
                first: Some(Player::Opponent)
            }
        );
        assert_eq!(
            "new".parse::<CommandInput>().unwrap(),
            CommandInput::NewGame { first: None }
        );
        assert_eq!(
            "reset".parse::<CommandInput>().unwrap(),
            CommandInput::Reset
        );
        assert_eq!("q".parse::<CommandInput>().unwrap(), CommandInput::Quit);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("L9".parse::<CommandInput>().is_err());
        assert!("X4".parse::<CommandInput>().is_err());
        assert!("e2e4".parse::<CommandInput>().is_err());
    }
}
