// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::i18n::{CANCEL, CAPTCHA_LABEL, SAVE, TAGS};
use crate::presenter::PreparedView;
use crate::response::QueuedMessage;
use crate::services::Localizer;
use minijinja::{Value, context};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct FormPageContext<'a> {
    app_name: String,
    lang: String,
    labels: FormLabels,
    view: &'a PreparedView,
}

#[derive(Debug, Clone)]
struct FormLabels {
    save: String,
    cancel: String,
    tags: String,
    captcha: String,
}

impl<'a> FormPageContext<'a> {
    pub fn new(app_name: &str, view: &'a PreparedView, localizer: &dyn Localizer) -> Self {
        Self {
            app_name: app_name.to_string(),
            lang: localizer.current_language_tag().to_string(),
            labels: FormLabels {
                save: localizer.translate(SAVE),
                cancel: localizer.translate(CANCEL),
                tags: localizer.translate(TAGS),
                captcha: localizer.translate(CAPTCHA_LABEL),
            },
            view,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            lang => &self.lang,
            title => &self.view.metadata.title,
            labels => context! {
                save => &self.labels.save,
                cancel => &self.labels.cancel,
                tags => &self.labels.tags,
                captcha => &self.labels.captcha
            },
            fields => Value::from_serialize(field_views(self.view)),
            view => Value::from_serialize(self.view)
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldView<'a> {
    name: &'a str,
    input_type: &'static str,
    label: &'a str,
    value: String,
}

/// Resolves each form field against the article, falling back to the field's
/// `default` attribute.
fn field_views(view: &PreparedView) -> Vec<FieldView<'_>> {
    let item = serde_json::to_value(&view.item).unwrap_or(serde_json::Value::Null);
    view.form
        .fields
        .iter()
        .map(|field| {
            let value = match item.get(&field.name) {
                Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
                Some(serde_json::Value::Number(n)) => n.to_string(),
                Some(serde_json::Value::Bool(b)) => b.to_string(),
                _ => field.attribute("default").unwrap_or_default().to_string(),
            };
            FieldView {
                name: &field.name,
                input_type: input_type(&field.field_type),
                label: field.label.as_deref().unwrap_or(&field.name),
                value,
            }
        })
        .collect()
}

fn input_type(field_type: &str) -> &'static str {
    match field_type {
        "email" => "email",
        "url" => "url",
        "number" | "integer" => "number",
        "hidden" => "hidden",
        "calendar" => "datetime-local",
        _ => "text",
    }
}

#[derive(Debug, Clone)]
pub struct DeniedPageContext<'a> {
    app_name: String,
    messages: &'a [QueuedMessage],
}

impl<'a> DeniedPageContext<'a> {
    pub fn new(app_name: &str, messages: &'a [QueuedMessage]) -> Self {
        Self {
            app_name: app_name.to_string(),
            messages,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            messages => Value::from_serialize(self.messages)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name
        }
    }
}
