//! Configuration loader
//!
//! Loads the IGDB configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `IGDB_BASE_URL`: IGDB API base URL
//! - `IGDB_AUTH_URL`: Twitch OAuth base URL
//! - `IGDB_CLIENT_ID`: Twitch application client id
//! - `IGDB_CLIENT_SECRET`: Twitch application client secret
//! - `IGDB_TIMEOUT_SECS`: Request timeout in seconds (optional, default 30)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./gameshelf.json` or `./gameshelf.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location
//!
//! Values are only parsed here; [`IgdbConfig::validate`] runs when the
//! client is constructed.

use std::path::{Path, PathBuf};

use gameshelf_domain::{GameshelfError, IgdbConfig, Result, DEFAULT_TIMEOUT_SECONDS};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file. Once
/// every required variable is set, an invalid optional value is an error
/// rather than a reason to fall back.
///
/// # Errors
/// Returns `GameshelfError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<IgdbConfig> {
    if let Some(missing) = first_missing_env_var() {
        tracing::debug!(missing, "Environment configuration incomplete, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Variables that must all be set for environment configuration to apply
const REQUIRED_ENV_VARS: [&str; 4] =
    ["IGDB_BASE_URL", "IGDB_AUTH_URL", "IGDB_CLIENT_ID", "IGDB_CLIENT_SECRET"];

fn first_missing_env_var() -> Option<&'static str> {
    REQUIRED_ENV_VARS.into_iter().find(|key| std::env::var(key).is_err())
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `GameshelfError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<IgdbConfig> {
    let base_url = env_var("IGDB_BASE_URL")?;
    let auth_url = env_var("IGDB_AUTH_URL")?;
    let client_id = env_var("IGDB_CLIENT_ID")?;
    let client_secret = env_var("IGDB_CLIENT_SECRET")?;

    let timeout_seconds = match std::env::var("IGDB_TIMEOUT_SECS") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| GameshelfError::config(format!("Invalid IGDB_TIMEOUT_SECS: {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    Ok(IgdbConfig { base_url, auth_url, client_id, client_secret, timeout_seconds })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GameshelfError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<IgdbConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GameshelfError::config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GameshelfError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GameshelfError::config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<IgdbConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GameshelfError::config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GameshelfError::config(format!("Invalid JSON format: {e}"))),
        _ => Err(GameshelfError::config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("gameshelf.json"),
        dir.join("gameshelf.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `GameshelfError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        GameshelfError::config(format!("Missing required environment variable: {key}"))
    })
}
