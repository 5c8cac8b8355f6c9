// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::article::{Article, ArticleId, CategoryId, TagRef};
use crate::config::ValidatedConfig;
use crate::form::{ArticleForm, FormField};
use crate::params::Params;
use crate::services::{Actor, ArticleModel, Authorizer, Capability, ModelState, TagService};
use std::collections::HashMap;

/// Article model that hands out fixed data.
#[derive(Debug, Clone)]
pub struct MemoryModel {
    pub state: ModelState,
    pub item: Article,
    pub form: ArticleForm,
    pub return_page: String,
    pub errors: Vec<String>,
}

impl MemoryModel {
    pub fn new_article() -> Self {
        Self {
            state: ModelState::default(),
            item: Article::default(),
            form: sample_form(),
            return_page: "/".to_string(),
            errors: Vec::new(),
        }
    }

    pub fn existing_article(id: u64) -> Self {
        let mut model = Self::new_article();
        model.item.id = Some(ArticleId(id));
        model.item.title = format!("Article {}", id);
        model
    }

    pub fn with_page_params(mut self, params: Params) -> Self {
        self.state.params = params;
        self
    }

    pub fn with_item_params(mut self, params: Params) -> Self {
        self.item.params = params;
        self
    }

    pub fn with_images(mut self, images: &str) -> Self {
        self.item.images = Some(images.to_string());
        self
    }

    pub fn with_urls(mut self, urls: &str) -> Self {
        self.item.urls = Some(urls.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.errors.push(error.to_string());
        self
    }
}

impl ArticleModel for MemoryModel {
    fn state(&self) -> ModelState {
        self.state.clone()
    }

    fn item(&self) -> Article {
        self.item.clone()
    }

    fn form(&self) -> ArticleForm {
        self.form.clone()
    }

    fn return_page(&self) -> String {
        self.return_page.clone()
    }

    fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }
}

pub fn sample_form() -> ArticleForm {
    ArticleForm::new("com_content.article")
        .with_field(FormField::new("title", "text").with_label("Title"))
        .with_field(FormField::new("catid", "category").with_label("Category"))
        .with_field(
            FormField::new("language", "contentlanguage")
                .with_label("Language")
                .with_attribute("default", "*"),
        )
}

/// Tag lookup keyed by article id. Records every lookup it serves.
#[derive(Debug, Default)]
pub struct MemoryTags {
    tags: HashMap<ArticleId, Vec<TagRef>>,
    lookups: std::sync::Mutex<Vec<(String, ArticleId)>>,
}

impl MemoryTags {
    pub fn with_tag(mut self, article: u64, id: u64, title: &str) -> Self {
        self.tags.entry(ArticleId(article)).or_default().push(TagRef {
            id,
            title: title.to_string(),
            path: title.to_lowercase(),
        });
        self
    }

    pub fn lookups(&self) -> Vec<(String, ArticleId)> {
        self.lookups
            .lock()
            .map(|lookups| lookups.clone())
            .unwrap_or_default()
    }
}

impl TagService for MemoryTags {
    fn item_tags(&self, content_type: &str, item_id: ArticleId) -> Vec<TagRef> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push((content_type.to_string(), item_id));
        }
        self.tags.get(&item_id).cloned().unwrap_or_default()
    }
}

/// Authorizer with fixed answers, independent of the actor.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizer {
    pub can_create: bool,
    pub create_categories: Vec<CategoryId>,
}

impl StaticAuthorizer {
    pub fn allow_all() -> Self {
        Self {
            can_create: true,
            create_categories: Vec::new(),
        }
    }

    pub fn deny_all() -> Self {
        Self::default()
    }

    pub fn categories_only(categories: &[CategoryId]) -> Self {
        Self {
            can_create: false,
            create_categories: categories.to_vec(),
        }
    }
}

impl Authorizer for StaticAuthorizer {
    fn actor_can(&self, _actor: &Actor, capability: Capability, _asset: &str) -> bool {
        match capability {
            Capability::Create => self.can_create,
        }
    }

    fn authorized_categories(
        &self,
        _actor: &Actor,
        _component: &str,
        capability: Capability,
    ) -> Vec<CategoryId> {
        match capability {
            Capability::Create => self.create_categories.clone(),
        }
    }
}

pub fn test_actor() -> Actor {
    Actor {
        id: 42,
        name: "Test Author".to_string(),
        roles: vec!["author".to_string()],
    }
}

pub fn test_config() -> ValidatedConfig {
    test_config_from_yaml("app:\n  name: Test App\n")
}

/// Panics on invalid YAML; fixtures only.
pub fn test_config_from_yaml(yaml: &str) -> ValidatedConfig {
    match ValidatedConfig::from_yaml_str(yaml) {
        Ok(config) => config,
        Err(err) => panic!("invalid test config: {}", err),
    }
}
