//! Start-up settings for the interactive session, read from the environment.

use crate::errors::NotationError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;

pub const START_FEN_ENV: &str = "CHESS_ACTIONS_START_FEN";
pub const LOG_FILTER_ENV: &str = "CHESS_ACTIONS_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Position loaded at start-up and by `reset`.
    pub start_position: GameState,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_position: GameState::new_game(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, NotationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values fall back to the defaults;
    /// a start FEN that does not parse is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NotationError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let start_fen = non_blank(START_FEN_ENV).unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
        let log_filter = non_blank(LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            start_position: GameState::from_fen(start_fen.trim())?,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = SessionConfig::from_lookup(|_| None).expect("defaults should load");
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.start_position.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_both_variables() {
        let config = SessionConfig::from_lookup(|key| match key {
            START_FEN_ENV => Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1".to_owned()),
            LOG_FILTER_ENV => Some("chess_actions=debug".to_owned()),
            _ => None,
        })
        .expect("config should load");

        assert_eq!(config.start_position.get_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(config.log_filter, "chess_actions=debug");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = SessionConfig::from_lookup(|_| Some("  ".to_owned())).expect("config should load");
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn bad_start_fen_is_rejected() {
        let result = SessionConfig::from_lookup(|key| (key == START_FEN_ENV).then(|| "8/8 w - - 0 1".to_owned()));
        assert_eq!(result, Err(NotationError::RankCount(2)));
    }
}
