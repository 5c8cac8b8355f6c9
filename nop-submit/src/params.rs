// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page and article parameters.
///
/// The named options are the ones the submission form reads; everything else a
/// model supplies is carried through `extra` so templates can still see it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageclass_sfx: Option<String>,
    #[serde(
        default,
        rename = "menu-meta_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_meta_description: Option<String>,
    #[serde(
        default,
        rename = "menu-meta_keywords",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_meta_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
    /// Raw value as computed by the model. Only a JSON `true` grants edit access.
    #[serde(
        default,
        rename = "access-edit",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_edit: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Params {
    /// Overlays `other` on top of `self`. Values set in `other` win; null and
    /// empty values never clear what `self` already has.
    pub fn merge(&mut self, other: &Params) {
        merge_option(&mut self.page_title, &other.page_title);
        merge_option(&mut self.page_heading, &other.page_heading);
        merge_option(&mut self.pageclass_sfx, &other.pageclass_sfx);
        merge_option(&mut self.menu_meta_description, &other.menu_meta_description);
        merge_option(&mut self.menu_meta_keywords, &other.menu_meta_keywords);
        merge_option(&mut self.robots, &other.robots);
        merge_option(&mut self.captcha, &other.captcha);
        if let Some(value) = other.access_edit.as_ref().filter(|v| is_set(v)) {
            self.access_edit = Some(value.clone());
        }
        for (key, value) in &other.extra {
            if is_set(value) {
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn access_edit_granted(&self) -> bool {
        matches!(self.access_edit, Some(Value::Bool(true)))
    }

    /// Returns the page heading, storing `default` first when none is set.
    pub fn def_page_heading(&mut self, default: String) -> String {
        def_text(&mut self.page_heading, default)
    }

    /// Returns the page title, storing `default` first when none is set.
    pub fn def_page_title(&mut self, default: String) -> String {
        def_text(&mut self.page_title, default)
    }

    pub fn extra_value(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Empty strings count as unset.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn merge_option(target: &mut Option<String>, source: &Option<String>) {
    if let Some(value) = non_empty(source) {
        *target = Some(value.to_string());
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn def_text(slot: &mut Option<String>, default: String) -> String {
    match non_empty(slot) {
        Some(value) => value.to_string(),
        None => {
            *slot = Some(default.clone());
            default
        }
    }
}
