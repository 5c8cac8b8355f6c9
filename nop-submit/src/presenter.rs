// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::article::{Article, decode_serialized_field};
use crate::config::ValidatedConfig;
use crate::form::ArticleForm;
use crate::i18n::NOT_AUTHORISED;
use crate::metadata::PageMetadata;
use crate::params::{Params, non_empty};
use crate::plugins;
use crate::services::{
    Actor, ArticleModel, Authorizer, Capability, DocumentSink, Localizer, MenuEntry,
    MessageLevel, Notifier, PluginRegistry, TagService,
};
use crate::templates::{FormPageContext, TemplateEngine, render_minijinja_template};
use crate::util::html_escape;
use log::{debug, error, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;

pub const CONTENT_COMPONENT: &str = "com_content";
pub const ARTICLE_CONTENT_TYPE: &str = "com_content.article";
pub const FORM_TEMPLATE: &str = "article/form.html";

const FORBIDDEN: u16 = 403;
const INTERNAL_SERVER_ERROR: u16 = 500;

/// Everything one submission-form request needs. Built by the host for each
/// request and dropped with it.
pub struct FormRequestContext<'a> {
    pub config: &'a ValidatedConfig,
    pub actor: &'a Actor,
    pub menu: Option<&'a MenuEntry>,
    pub model: &'a dyn ArticleModel,
    pub authorizer: &'a dyn Authorizer,
    pub tags: &'a dyn TagService,
    pub plugins: &'a dyn PluginRegistry,
    pub localizer: &'a dyn Localizer,
    pub document: &'a mut dyn DocumentSink,
    pub notifier: &'a mut dyn Notifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationFailure {
    message: String,
    status: u16,
}

impl AuthorizationFailure {
    pub fn new() -> Self {
        Self {
            message: "not authorized".to_string(),
            status: FORBIDDEN,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }
}

impl Default for AuthorizationFailure {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum FormError {
    /// Errors the model collected while loading, in order.
    ModelLoad(Vec<String>),
    Render(String),
}

impl FormError {
    pub fn status_code(&self) -> u16 {
        INTERNAL_SERVER_ERROR
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::ModelLoad(errors) => write!(f, "{}", errors.join("\n")),
            FormError::Render(msg) => write!(f, "Failed to render article form: {}", msg),
        }
    }
}

impl Error for FormError {}

/// View model handed to the form template.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedView {
    pub item: Article,
    pub form: ArticleForm,
    pub return_page: String,
    pub params: Params,
    pub pageclass_sfx: String,
    pub captcha_enabled: bool,
    pub metadata: PageMetadata,
    pub images: Value,
    pub urls: Value,
    pub actor: Actor,
}

#[derive(Debug)]
pub enum FormOutcome {
    Ready(Box<PreparedView>),
    Denied(AuthorizationFailure),
}

#[derive(Debug)]
pub enum ViewResponse {
    Html(String),
    Denied(AuthorizationFailure),
}

/// One stage of the page render pipeline: prepare state from `C`, then render.
pub trait HtmlView<C: ?Sized> {
    fn display(
        &self,
        context: &mut C,
        engine: &dyn TemplateEngine,
    ) -> Result<ViewResponse, FormError>;
}

#[derive(Debug, Clone)]
pub struct ArticleFormPresenter {
    template: String,
}

impl Default for ArticleFormPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleFormPresenter {
    pub fn new() -> Self {
        Self::with_template(FORM_TEMPLATE)
    }

    pub fn with_template(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn prepare(&self, ctx: &mut FormRequestContext<'_>) -> Result<FormOutcome, FormError> {
        let state = ctx.model.state();
        let mut item = ctx.model.item();
        let mut form = ctx.model.form();
        let return_page = ctx.model.return_page();

        if !is_authorized(&item, ctx.actor, ctx.authorizer) {
            warn!(
                "Actor {} denied access to article form (article {})",
                ctx.actor.id,
                item.existing_id()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "new".to_string())
            );
            ctx.notifier.enqueue_message(
                &ctx.localizer.translate(NOT_AUTHORISED),
                MessageLevel::Error,
            );
            let failure = AuthorizationFailure::new();
            ctx.notifier.set_response_status(failure.status_code());
            return Ok(FormOutcome::Denied(failure));
        }

        item.tags = match item.existing_id() {
            Some(id) => ctx.tags.item_tags(ARTICLE_CONTENT_TYPE, id),
            None => Vec::new(),
        };

        // Binding follows `is_new`, so an id of 0 binds nothing.
        let (images, urls) = if item.is_new() {
            (Value::Null, Value::Null)
        } else {
            let images = decode_serialized_field("images", item.images.as_deref());
            let urls = decode_serialized_field("urls", item.urls.as_deref());
            let mut bound = Map::new();
            bound.insert("images".to_string(), images.clone());
            bound.insert("urls".to_string(), urls.clone());
            form.bind(bound);
            (images, urls)
        };

        let errors = ctx.model.errors();
        if !errors.is_empty() {
            error!("Article form model reported {} error(s)", errors.len());
            return Err(FormError::ModelLoad(errors));
        }

        let mut params = state.params;
        let pageclass_sfx = html_escape(params.pageclass_sfx.as_deref().unwrap_or(""));
        params.merge(&item.params);

        if item.is_new() && ctx.config.app.multilingual {
            let tag = ctx.localizer.current_language_tag();
            debug!("Proposing language '{}' for new article", tag);
            form.set_field_attribute("language", "default", tag);
        }

        let configured_captcha = non_empty(&params.captcha)
            .map(str::to_string)
            .or_else(|| ctx.config.app.captcha.clone());
        let captcha_enabled = plugins::captcha_enabled(configured_captcha.as_deref(), ctx.plugins);

        let metadata =
            PageMetadata::compute(&mut params, ctx.menu, &ctx.config.app, ctx.localizer);
        metadata.apply(ctx.document);

        Ok(FormOutcome::Ready(Box::new(PreparedView {
            item,
            form,
            return_page,
            params,
            pageclass_sfx,
            captcha_enabled,
            metadata,
            images,
            urls,
            actor: ctx.actor.clone(),
        })))
    }
}

impl<'a> HtmlView<FormRequestContext<'a>> for ArticleFormPresenter {
    fn display(
        &self,
        context: &mut FormRequestContext<'a>,
        engine: &dyn TemplateEngine,
    ) -> Result<ViewResponse, FormError> {
        let view = match self.prepare(context)? {
            FormOutcome::Ready(view) => view,
            FormOutcome::Denied(failure) => return Ok(ViewResponse::Denied(failure)),
        };

        let page =
            FormPageContext::new(&context.config.app.name, &view, context.localizer).to_value();
        render_minijinja_template(engine, &self.template, page)
            .map(ViewResponse::Html)
            .map_err(|e| {
                error!("Failed to render template '{}': {}", self.template, e);
                FormError::Render(e.to_string())
            })
    }
}

/// New articles need create rights on the component or on at least one
/// category. Existing ones need `access-edit` to be exactly `true`.
pub fn is_authorized(item: &Article, actor: &Actor, authorizer: &dyn Authorizer) -> bool {
    match item.existing_id() {
        None => {
            authorizer.actor_can(actor, Capability::Create, CONTENT_COMPONENT)
                || !authorizer
                    .authorized_categories(actor, CONTENT_COMPONENT, Capability::Create)
                    .is_empty()
        }
        Some(_) => item.params.access_edit_granted(),
    }
}
