use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings from `config.toml` in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path of the country catalog JSON file. Relative paths resolve
    /// against the data directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Resolve the data directory path based on priority:
/// 1. Explicit `--data-dir` flag (with tilde expansion)
/// 2. WAYFARER_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.wayfarer (fallback for systems without a data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var("WAYFARER_PATH") {
        return expand_tilde(&env_path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("wayfarer");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".wayfarer");
    }

    PathBuf::from(".wayfarer")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = resolve_data_dir(Some("/tmp/wayfarer-test"));
        assert_eq!(dir, PathBuf::from("/tmp/wayfarer-test"));
    }

    #[test]
    fn test_missing_config_is_default() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.catalog.is_none());
    }
}
