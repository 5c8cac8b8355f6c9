// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::access::normalize_roles;
use crate::article::CategoryId;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the site name goes in the document title.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum SiteNamePlacement {
    #[default]
    None,
    Before,
    After,
}

impl TryFrom<u8> for SiteNamePlacement {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SiteNamePlacement::None),
            1 => Ok(SiteNamePlacement::Before),
            2 => Ok(SiteNamePlacement::After),
            other => Err(format!(
                "sitename_pagetitles must be 0, 1 or 2, got: {}",
                other
            )),
        }
    }
}

impl From<SiteNamePlacement> for u8 {
    fn from(value: SiteNamePlacement) -> Self {
        match value {
            SiteNamePlacement::None => 0,
            SiteNamePlacement::Before => 1,
            SiteNamePlacement::After => 2,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub name: String,
    #[serde(default)]
    pub sitename_pagetitles: SiteNamePlacement,
    #[serde(default)]
    pub multilingual: bool,
    /// Site-wide captcha plugin, used when the page params name none.
    #[serde(default)]
    pub captcha: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LanguageConfig {
    #[serde(default = "default_language_tag")]
    pub tag: String,
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            tag: default_language_tag(),
            strings: BTreeMap::new(),
        }
    }
}

fn default_language_tag() -> String {
    "en-GB".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AccessConfig {
    #[serde(default = "default_create_roles")]
    pub create_roles: Vec<String>,
    #[serde(default)]
    pub category_create_roles: BTreeMap<CategoryId, Vec<String>>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            create_roles: default_create_roles(),
            category_create_roles: BTreeMap::new(),
        }
    }
}

fn default_create_roles() -> Vec<String> {
    vec![crate::access::ADMIN_ROLE.to_string()]
}

/// Enabled plugin names keyed by plugin kind (`captcha`, ...).
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PluginsConfig {
    #[serde(flatten)]
    pub enabled: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub app: AppConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub plugins: PluginsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub language: LanguageConfig,
    pub access: AccessConfig,
    pub plugins: PluginsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE_NAME);
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Self::parse(&config_content).map_err(|e| match e {
            ConfigError::LoadError(msg) => ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                msg
            )),
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Loads and validates configuration. A config that fails validation must not be served.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        Self::load(root)?.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        Self::validate_logging(&self.logging)?;
        Self::validate_language(&self.language)?;

        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name must not be empty".to_string(),
            ));
        }

        let create_roles = normalize_roles(&self.access.create_roles)
            .map_err(|e| ConfigError::ValidationError(format!("access.create_roles: {}", e)))?;
        let mut category_create_roles = BTreeMap::new();
        for (category_id, roles) in &self.access.category_create_roles {
            let roles = normalize_roles(roles).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "access.category_create_roles.{}: {}",
                    category_id, e
                ))
            })?;
            category_create_roles.insert(*category_id, roles);
        }

        if let Some(captcha) = self.app.captcha.as_deref() {
            let enabled = self
                .plugins
                .enabled
                .get(crate::plugins::CAPTCHA_PLUGIN_KIND)
                .is_some_and(|names| names.iter().any(|name| name == captcha));
            if !enabled {
                warn!(
                    "Default captcha plugin '{}' is not enabled; submission forms will render without captcha",
                    captcha
                );
            }
        }

        Ok(ValidatedConfig {
            app: self.app,
            language: self.language,
            access: AccessConfig {
                create_roles,
                category_create_roles,
            },
            plugins: self.plugins,
            logging: self.logging,
        })
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        match logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "logging.level must be one of trace, debug, info, warn, error; got: {}",
                other
            ))),
        }
    }

    fn validate_language(language: &LanguageConfig) -> Result<(), ConfigError> {
        if !is_valid_language_tag(&language.tag) {
            return Err(ConfigError::ValidationError(format!(
                "language.tag must look like 'en' or 'en-GB', got: '{}'",
                language.tag
            )));
        }
        Ok(())
    }
}

impl ValidatedConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Config::parse(content)?.validate()
    }
}

fn is_valid_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_lowercase()));
    primary_ok
        && parts.all(|p| {
            !p.is_empty() && p.len() <= 8 && p.chars().all(|c| c.is_ascii_alphanumeric())
        })
}
