// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::PluginsConfig;
use crate::services::{PluginInfo, PluginRegistry};
use std::collections::BTreeMap;

pub const CAPTCHA_PLUGIN_KIND: &str = "captcha";

/// Plugin registry backed by the `plugins` section of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredPlugins {
    enabled: BTreeMap<String, Vec<String>>,
}

impl ConfiguredPlugins {
    pub fn new(config: &PluginsConfig) -> Self {
        Self {
            enabled: config.enabled.clone(),
        }
    }

    pub fn with_plugin(mut self, kind: &str, name: &str) -> Self {
        self.enabled
            .entry(kind.to_string())
            .or_default()
            .push(name.to_string());
        self
    }
}

impl PluginRegistry for ConfiguredPlugins {
    fn enabled_plugins(&self, kind: &str) -> Vec<PluginInfo> {
        self.enabled
            .get(kind)
            .map(|names| {
                names
                    .iter()
                    .map(|name| PluginInfo { name: name.clone() })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// True when `configured` names one of the enabled captcha plugins.
pub fn captcha_enabled(configured: Option<&str>, registry: &dyn PluginRegistry) -> bool {
    let Some(configured) = configured.filter(|name| !name.is_empty()) else {
        return false;
    };
    registry
        .enabled_plugins(CAPTCHA_PLUGIN_KIND)
        .iter()
        .any(|plugin| plugin.name == configured)
}
