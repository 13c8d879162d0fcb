//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FireSaleError, FireSaleResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FireSaleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FireSaleError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FireSaleError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(dotted).to_string();
            ConfigWarning {
                line: line_of(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Path of the user config file (`<config_dir>/firesale/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("firesale").join("config.toml"))
}

/// Load the user config or defaults, then apply env overrides.
///
/// A broken user config is reported and ignored rather than failing startup.
pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => return (with_env_overrides(config), warnings),
                Err(e) => log::warn!("ignoring config: {}", e),
            }
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (FIRESALE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // FIRESALE_RESIDENT
    if let Ok(val) = std::env::var("FIRESALE_RESIDENT") {
        config.app.resident = parse_bool(&val);
    }

    // FIRESALE_DEBOUNCE_MS
    if let Ok(val) = std::env::var("FIRESALE_DEBOUNCE_MS") {
        match val.trim().parse() {
            Ok(ms) => config.watch.debounce_ms = ms,
            Err(_) => log::warn!("FIRESALE_DEBOUNCE_MS is not a number: {}", val),
        }
    }

    // FIRESALE_JSON
    if let Ok(val) = std::env::var("FIRESALE_JSON") {
        config.output.json = parse_bool(&val);
    }

    config
}

fn parse_bool(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && !val.is_empty()
}

/// 1-based line of the first mention of `key`
fn line_of(content: &str, key: &str) -> Option<usize> {
    content.lines().position(|line| line.contains(key)).map(|i| i + 1)
}

/// Every key the config file understands, for "did you mean" hints
const KNOWN_KEYS: &[&str] = &[
    "app",
    "resident",
    "title",
    "window",
    "cascade_offset",
    "default_x",
    "default_y",
    "watch",
    "enabled",
    "debounce_ms",
    "sync",
    "reload_on_decline",
    "output",
    "verbosity",
    "json",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(known, _)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
