use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_ENABLED: &str = "INTERCOM_ENABLED";
pub const ENV_APP_ID: &str = "INTERCOM_APP_ID";
pub const ENV_ID_VERIFICATION_SECRET: &str = "INTERCOM_ID_VERIFICATION_SECRET";

/// Plugin settings, named as the host stores them.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub enabled: bool,
    /// Public Intercom workspace id
    #[serde(default)]
    pub app_id: String,
    /// HMAC key for identity verification
    #[serde(default)]
    pub id_verification_secret: String,
}

impl std::fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginConfig")
            .field("enabled", &self.enabled)
            .field("app_id", &self.app_id)
            .field("has_id_verification_secret", &self.has_secret())
            .finish()
    }
}

impl PluginConfig {
    /// Reads the YAML file if given, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Invalid plugin configuration in {}", path.display()))
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(ENV_ENABLED) {
            self.enabled = parse_flag(&value)
                .with_context(|| format!("{ENV_ENABLED} must be a boolean, got '{value}'"))?;
        }
        if let Ok(value) = std::env::var(ENV_APP_ID) {
            self.app_id = value;
        }
        if let Ok(value) = std::env::var(ENV_ID_VERIFICATION_SECRET) {
            self.id_verification_secret = value;
        }
        Ok(())
    }

    pub fn has_secret(&self) -> bool {
        !self.id_verification_secret.is_empty()
    }

    /// Enabled and pointing at an Intercom workspace.
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.app_id.is_empty()
    }
}

// Hosts store checkboxes as "1"/"0"
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(i) => Ok(i != 0),
        Flag::Str(s) => parse_flag(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean flag '{s}'"))),
    }
}
