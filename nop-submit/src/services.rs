// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Collaborators the form view calls into. The host supplies them per request.

use crate::article::{Article, ArticleId, CategoryId, TagRef};
use crate::form::ArticleForm;
use crate::params::Params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelState {
    pub params: Params,
}

pub trait ArticleModel {
    fn state(&self) -> ModelState;
    fn item(&self) -> Article;
    fn form(&self) -> ArticleForm;
    fn return_page(&self) -> String;
    /// Errors collected while loading, in the order they occurred.
    fn errors(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Create,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Actor {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn is_guest(&self) -> bool {
        self.id == 0
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

pub trait Authorizer {
    fn actor_can(&self, actor: &Actor, capability: Capability, asset: &str) -> bool;
    fn authorized_categories(
        &self,
        actor: &Actor,
        component: &str,
        capability: Capability,
    ) -> Vec<CategoryId>;
}

pub trait TagService {
    fn item_tags(&self, content_type: &str, item_id: ArticleId) -> Vec<TagRef>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub name: String,
}

pub trait PluginRegistry {
    fn enabled_plugins(&self, kind: &str) -> Vec<PluginInfo>;
}

pub trait Localizer {
    fn current_language_tag(&self) -> &str;
    /// Unknown keys come back unchanged.
    fn translate(&self, key: &str) -> String;
    /// Translates `key` and substitutes `%s` / `%1$s` placeholders with `args`.
    fn format(&self, key: &str, args: &[&str]) -> String;
}

pub trait DocumentSink {
    fn set_title(&mut self, title: &str);
    fn set_description(&mut self, description: &str);
    fn set_meta_data(&mut self, name: &str, content: &str);
    fn add_breadcrumb(&mut self, title: &str, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Message,
    Notice,
    Warning,
    Error,
}

pub trait Notifier {
    fn enqueue_message(&mut self, text: &str, level: MessageLevel);
    fn set_response_status(&mut self, code: u16);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: u64,
    pub title: String,
}
