// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use nop_submit::access::RoleAuthorizer;
use nop_submit::config::{Config, ValidatedConfig};
use nop_submit::document::DocumentHead;
use nop_submit::i18n::Catalog;
use nop_submit::plugins::ConfiguredPlugins;
use nop_submit::presenter::{
    ArticleFormPresenter, FormError, FormRequestContext, HtmlView, ViewResponse,
};
use nop_submit::response::ResponseState;
use nop_submit::services::{Actor, MenuEntry};
use nop_submit::templates::MiniJinjaEngine;
use nop_submit::util::{MemoryModel, MemoryTags};
use std::fs;
use tempfile::TempDir;

pub const SITE_CONFIG: &str = r#"
app:
  name: Demo
  sitename_pagetitles: 1
  multilingual: true
  captcha: recaptcha
language:
  tag: fr-FR
  strings:
    COM_CONTENT_FORM_EDIT_ARTICLE: Modifier un article
    JSAVE: Enregistrer
access:
  create_roles: [editor]
  category_create_roles:
    12: [author]
plugins:
  captcha: [recaptcha]
logging:
  level: debug
"#;

/// A site configured from a real `config.yaml` on disk, wired to the
/// configuration backed collaborators.
pub struct TestSite {
    _root: TempDir,
    pub config: ValidatedConfig,
    pub authorizer: RoleAuthorizer,
    pub plugins: ConfiguredPlugins,
    pub catalog: Catalog,
    pub tags: MemoryTags,
    pub engine: MiniJinjaEngine,
}

pub struct Rendered {
    pub result: Result<ViewResponse, FormError>,
    pub document: DocumentHead,
    pub response: ResponseState,
}

impl TestSite {
    pub fn new(config_yaml: &str) -> Self {
        let root = tempfile::tempdir().expect("temp dir");
        fs::write(root.path().join("config.yaml"), config_yaml).expect("write config");
        let config = Config::load_and_validate(root.path()).expect("valid config");
        Self {
            authorizer: RoleAuthorizer::new(&config.access),
            plugins: ConfiguredPlugins::new(&config.plugins),
            catalog: Catalog::from_config(&config.language),
            tags: MemoryTags::default(),
            engine: MiniJinjaEngine::new(),
            config,
            _root: root,
        }
    }

    pub fn display(
        &self,
        model: &MemoryModel,
        actor: &Actor,
        menu: Option<&MenuEntry>,
    ) -> Rendered {
        let mut document = DocumentHead::new();
        let mut response = ResponseState::new();
        let result = {
            let mut ctx = FormRequestContext {
                config: &self.config,
                actor,
                menu,
                model,
                authorizer: &self.authorizer,
                tags: &self.tags,
                plugins: &self.plugins,
                localizer: &self.catalog,
                document: &mut document,
                notifier: &mut response,
            };
            ArticleFormPresenter::new().display(&mut ctx, &self.engine)
        };
        Rendered {
            result,
            document,
            response,
        }
    }
}

pub fn actor(id: u64, roles: &[&str]) -> Actor {
    Actor {
        id,
        name: format!("User {}", id),
        roles: roles.iter().map(|role| role.to_string()).collect(),
    }
}

pub fn html(rendered: &Rendered) -> &str {
    match &rendered.result {
        Ok(ViewResponse::Html(html)) => html.as_str(),
        other => panic!("expected rendered html, got {:?}", other),
    }
}
