//! Shared utilities for CLI commands.

use std::time::Duration;

/// A zero delay disables pacing.
pub(crate) fn delay_from_millis(millis: u64) -> Option<Duration> {
    (millis > 0).then(|| Duration::from_millis(millis))
}

/// Search depth argument; the search needs at least one ply.
pub(crate) fn parse_depth(depth: &str) -> Result<u8, String> {
    match depth.parse::<u8>() {
        Ok(0) => Err("depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(error) => Err(format!("invalid depth '{}': {}", depth, error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("4"), Ok(4));
        assert_eq!(parse_depth("1"), Ok(1));
        assert!(parse_depth("0").is_err());
        assert!(parse_depth("deep").is_err());
    }

    #[test]
    fn test_zero_delay_disables_pacing() {
        assert_eq!(delay_from_millis(0), None);
        assert_eq!(delay_from_millis(300), Some(Duration::from_millis(300)));
    }
}
