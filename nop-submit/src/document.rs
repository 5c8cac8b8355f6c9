// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::services::DocumentSink;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub title: String,
    pub url: String,
}

/// Head data of the page being built: title, description, meta tags and the
/// breadcrumb trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentHead {
    title: String,
    description: Option<String>,
    meta: BTreeMap<String, String>,
    breadcrumbs: Vec<Breadcrumb>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }
}

impl DocumentSink for DocumentHead {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    fn set_meta_data(&mut self, name: &str, content: &str) {
        self.meta.insert(name.to_string(), content.to_string());
    }

    fn add_breadcrumb(&mut self, title: &str, url: &str) {
        self.breadcrumbs.push(Breadcrumb {
            title: title.to_string(),
            url: url.to_string(),
        });
    }
}
