//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gazette/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GazetteConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Seed for the synthesized per-card like/comment counts.
    pub seed: Option<u64>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Default count seed. Any value works; this one is fixed so two runs of the
/// same build show the same counts.
pub const DEFAULT_SEED: u64 = 0xFEED;
pub const DEFAULT_LOG_FILE: &str = "gazette.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub seed: u64,
    pub log_file: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gazette/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gazette").join("config.toml"))
}

/// Load config from `~/.gazette/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GazetteConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GazetteConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GazetteConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GazetteConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GazetteConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Gazette Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed = 65261                 # Seed for the synthesized like/comment counts
# log_file = "gazette.log"

# [api]
# base_url = "https://gorest.co.in/public/v2"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` and `cli_seed` are from CLI flags (None = not specified).
pub fn resolve(
    config: &GazetteConfig,
    cli_base_url: Option<&str>,
    cli_seed: Option<u64>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("GAZETTE_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Seed: CLI → env → config → default
    let env_seed = std::env::var("GAZETTE_SEED").ok().and_then(|s| match s.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("GAZETTE_SEED is not a number, ignoring: {}", s);
            None
        }
    });
    let seed = cli_seed
        .or(env_seed)
        .or(config.general.seed)
        .unwrap_or(DEFAULT_SEED);

    // Log file: config → default
    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        base_url,
        seed,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GazetteConfig::default();
        assert!(config.general.seed.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = GazetteConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.seed, DEFAULT_SEED);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GazetteConfig {
            general: GeneralConfig {
                seed: Some(42),
                log_file: Some("elsewhere.log".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://localhost:9000".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.seed, 42);
        assert_eq!(resolved.log_file, "elsewhere.log");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = GazetteConfig {
            general: GeneralConfig {
                seed: Some(42),
                log_file: None,
            },
            api: ApiConfig {
                base_url: Some("http://from-config:9000".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli:9001"), Some(7));
        assert_eq!(resolved.base_url, "http://from-cli:9001");
        assert_eq!(resolved.seed, 7);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
seed = 1234
log_file = "feed.log"

[api]
base_url = "https://mirror.example/v2"
"#;
        let config: GazetteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.seed, Some(1234));
        assert_eq!(config.general.log_file.as_deref(), Some("feed.log"));
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://mirror.example/v2")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
seed = 9
"#;
        let config: GazetteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.seed, Some(9));
        assert!(config.general.log_file.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_unknown_sections_are_tolerated() {
        // A config written for a newer version should still load.
        let toml_str = r#"
[general]
seed = 9

[appearance]
theme = "dark"
"#;
        let config: GazetteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.seed, Some(9));
    }
}
