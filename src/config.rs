//! Server configuration parsed from environment variables.
//!
//! Leptos site settings (site root, pkg dir, output name) come from the
//! `LEPTOS_*` variables that `leptos_config` reads; this covers the rest.

use client::app::DEFAULT_LANG;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("PAGESHELL_LANG must not be blank")]
    BlankLang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `lang` attribute of every served document.
    pub lang: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PAGESHELL_LANG`: document language, default `en`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable port or a blank language.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let lang = match lookup("PAGESHELL_LANG") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::BlankLang),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_LANG.to_owned(),
        };

        Ok(Self { port, lang })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
