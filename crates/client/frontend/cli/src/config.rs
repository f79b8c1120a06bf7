//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

use duel_runtime::RuntimeConfig;
use duel_search::{SearchConfig, TieBreak};

/// Everything the `duel` binary needs to start a match.
#[derive(Clone, Debug, Default)]
pub struct DuelConfig {
    pub search: SearchConfig,
    pub runtime: RuntimeConfig,
    pub ui: UiConfig,
    /// Log session name. Generated from the clock when unset.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
}

impl DuelConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_LOOKAHEAD` - Full rounds the engine reads ahead (default: 4, min: 1)
    /// - `DUEL_TIE_BREAK` - `first` or `last` (default: first)
    /// - `DUEL_TRANSPOSITION` - Cache repeated positions during search (default: false)
    /// - `DUEL_MAX_ROUNDS` - Declare a draw after this many rounds (default: unlimited)
    /// - `DUEL_COLOR` - ANSI colour output (default: true)
    /// - `DUEL_SESSION_ID` - Log session name
    /// - `DUEL_LOG_DIR` - Log directory override
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(rounds) = read_env::<u32>(&lookup, "DUEL_LOOKAHEAD") {
            config.search.lookahead_rounds = rounds.max(1);
        }
        if let Some(tie_break) = read_env::<TieBreak>(&lookup, "DUEL_TIE_BREAK") {
            config.search.tie_break = tie_break;
        }
        if let Some(enabled) = read_env_bool(&lookup, "DUEL_TRANSPOSITION") {
            config.search.transposition = enabled;
        }
        if let Some(limit) = read_env::<u32>(&lookup, "DUEL_MAX_ROUNDS") {
            config.runtime.max_rounds = Some(limit.max(1));
        }
        if let Some(color) = read_env_bool(&lookup, "DUEL_COLOR") {
            config.ui.color = color;
        }

        config.session_id = lookup("DUEL_SESSION_ID").filter(|id| !id.trim().is_empty());
        config.log_dir = lookup("DUEL_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

/// Display settings.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DuelConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DuelConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.search.lookahead_rounds, 4);
        assert_eq!(config.runtime.max_rounds, None);
        assert!(config.ui.color);
        assert!(config.session_id.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_search_settings() {
        let config = config_from(&[
            ("DUEL_LOOKAHEAD", "2"),
            ("DUEL_TIE_BREAK", "Last"),
            ("DUEL_TRANSPOSITION", "yes"),
        ]);
        assert_eq!(config.search.lookahead_rounds, 2);
        assert_eq!(config.search.tie_break, TieBreak::LastGenerated);
        assert!(config.search.transposition);
    }

    #[test]
    fn clamps_and_ignores_bad_values() {
        let config = config_from(&[
            ("DUEL_LOOKAHEAD", "0"),
            ("DUEL_MAX_ROUNDS", "0"),
            ("DUEL_TIE_BREAK", "random"),
            ("DUEL_COLOR", "maybe"),
        ]);
        assert_eq!(config.search.lookahead_rounds, 1);
        assert_eq!(config.runtime.max_rounds, Some(1));
        assert_eq!(config.search.tie_break, TieBreak::FirstGenerated);
        assert!(config.ui.color);
    }

    #[test]
    fn reads_session_settings() {
        let config = config_from(&[
            ("DUEL_COLOR", "off"),
            ("DUEL_SESSION_ID", "practice"),
            ("DUEL_LOG_DIR", "/tmp/duel-logs"),
        ]);
        assert!(!config.ui.color);
        assert_eq!(config.session_id.as_deref(), Some("practice"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/duel-logs")));
    }
}
