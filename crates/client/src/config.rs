//! Client settings read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings that shape how the client drives a match, independent of the
/// match content itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Simulated seconds per wall second during real-time playback.
    pub speed: f64,
    /// Seed used when neither the command line nor the battle file sets one.
    pub seed: Option<u64>,
    /// Wall time between playback frames.
    pub frame_interval: Duration,
    /// Directory for the file log. Logging goes to stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            seed: None,
            frame_interval: Duration::from_millis(Self::DEFAULT_FRAME_MS),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_FRAME_MS: u64 = 16;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SPEED` - Playback speed multiplier (default: 1.0)
    /// - `DUEL_SEED` - Default match seed (default: unset)
    /// - `DUEL_FRAME_MS` - Playback frame interval in milliseconds (default: 16)
    /// - `DUEL_LOG_DIR` - Directory for `duel.log` (default: no file log)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(speed) = read_env::<f64, _>(&lookup, "DUEL_SPEED")
            && speed.is_finite()
            && speed > 0.0
        {
            config.speed = speed;
        }

        config.seed = read_env(&lookup, "DUEL_SEED");

        if let Some(ms) = read_env::<u64, _>(&lookup, "DUEL_FRAME_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }

        config.log_dir = lookup("DUEL_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUEL_SPEED", "4"),
            ("DUEL_SEED", " 77 "),
            ("DUEL_FRAME_MS", "33"),
            ("DUEL_LOG_DIR", "/tmp/duel"),
        ]));
        assert_eq!(config.speed, 4.0);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.frame_interval, Duration::from_millis(33));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/duel")));
    }

    #[test]
    fn test_ignores_unusable_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUEL_SPEED", "-2"),
            ("DUEL_SEED", "abc"),
            ("DUEL_FRAME_MS", "0"),
            ("DUEL_LOG_DIR", ""),
        ]));
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.seed, None);
        assert_eq!(config.frame_interval, Duration::from_millis(1));
        assert_eq!(config.log_dir, None);
    }
}
