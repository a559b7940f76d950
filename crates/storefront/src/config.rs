//! Shell configuration from the environment.

use std::path::PathBuf;

use anyhow::Context;

use booknest_api::ApiConfig;

pub const SESSION_FILE_ENV: &str = "BOOKNEST_SESSION_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub api: ApiConfig,
    /// Where the native shell keeps the session between runs.
    pub session_file: PathBuf,
}

impl StorefrontConfig {
    /// Read `BOOKNEST_API_BASE` and `BOOKNEST_SESSION_FILE`, with defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let session_file = match std::env::var_os(SESSION_FILE_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_session_path()?,
        };

        Ok(Self {
            api: ApiConfig::from_env(),
            session_file,
        })
    }
}

/// `<data dir>/booknest/session.json`.
pub fn default_session_path() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    dir.push("booknest");
    dir.push("session.json");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_lives_under_app_dir() {
        if let Ok(path) = default_session_path() {
            assert!(path.ends_with("booknest/session.json"), "{path:?}");
        }
    }
}
