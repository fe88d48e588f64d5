//! Connection settings read from a `bridge-sdk.properties` file:
//! plain `key=value` lines naming the host, study, and optionally a
//! default account to sign in with.

use crate::errors::InvalidBridgeUrl;
use crate::types::{BridgeUrl, StudyIdentifier, Username};
use camino::Utf8Path;
use std::collections::HashMap;

/// File name conventionally used for the properties file.
pub const DEFAULT_PROPERTIES_FILE: &str = "bridge-sdk.properties";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing property: {0}")]
    Missing(&'static str),

    #[error(transparent)]
    Url(#[from] InvalidBridgeUrl),
}

/// Key-value settings for reaching a Bridge server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    properties: HashMap<String, String>,
}

impl Config {
    /// Read `bridge-sdk.properties` from the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_PROPERTIES_FILE)
    }

    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        let text = fs_err::read_to_string(path.as_ref().as_std_path())?;
        Ok(Self::parse(&text))
    }

    /// Parse `key=value` lines. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        let mut properties = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                properties.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self { properties }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Base URL of the Bridge server (`host` property).
    pub fn host(&self) -> Result<BridgeUrl, ConfigError> {
        let raw = self.get("host").ok_or(ConfigError::Missing("host"))?;
        Ok(BridgeUrl::try_from(raw)?)
    }

    /// Identifier of the study to run against (`study` property).
    pub fn study(&self) -> Result<StudyIdentifier, ConfigError> {
        let raw = self.get("study").ok_or(ConfigError::Missing("study"))?;
        Ok(StudyIdentifier::new(raw.to_string()))
    }

    /// Default account name, when one is configured.
    pub fn username(&self) -> Option<Username> {
        self.get("username")
            .map(|raw| Username::new(raw.to_string()))
    }

    /// Default account password, when one is configured.
    pub fn password(&self) -> Option<&str> {
        self.get("password")
    }
}
