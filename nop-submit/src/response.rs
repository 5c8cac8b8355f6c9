// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::presenter::{FormError, ViewResponse};
use crate::services::{MessageLevel, Notifier};
use crate::templates::{
    DeniedPageContext, ErrorPageContext, TemplateEngine, render_minijinja_template,
};
use crate::util::html_escape;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueuedMessage {
    pub text: String,
    pub level: MessageLevel,
}

/// Collects the status code and user messages a view asks for.
#[derive(Debug, Clone, Default)]
pub struct ResponseState {
    status: Option<u16>,
    messages: Vec<QueuedMessage>,
}

impl ResponseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn messages(&self) -> &[QueuedMessage] {
        &self.messages
    }
}

impl Notifier for ResponseState {
    fn enqueue_message(&mut self, text: &str, level: MessageLevel) {
        self.messages.push(QueuedMessage {
            text: text.to_string(),
            level,
        });
    }

    fn set_response_status(&mut self, code: u16) {
        self.status = Some(code);
    }
}

pub fn into_http_response(
    result: Result<ViewResponse, FormError>,
    state: &ResponseState,
    app_name: &str,
    template_engine: Option<&dyn TemplateEngine>,
) -> HttpResponse {
    match result {
        Ok(ViewResponse::Html(html)) => {
            let status = state
                .status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::OK);
            HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(html)
        }
        Ok(ViewResponse::Denied(failure)) => {
            let status = state.status().unwrap_or(failure.status_code());
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::FORBIDDEN);
            serve_denied(status, state.messages(), app_name, template_engine)
        }
        Err(err) => {
            log::error!("Article form request failed: {}", err);
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            serve_error(status, app_name, template_engine)
        }
    }
}

fn serve_denied(
    status: StatusCode,
    messages: &[QueuedMessage],
    app_name: &str,
    template_engine: Option<&dyn TemplateEngine>,
) -> HttpResponse {
    let context = DeniedPageContext::new(app_name, messages).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_403.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 403 error template: {}", e);
                fallback_403_html(app_name, messages)
            }
        },
        None => fallback_403_html(app_name, messages),
    };

    no_cache(HttpResponse::build(status)).body(html)
}

fn serve_error(
    status: StatusCode,
    app_name: &str,
    template_engine: Option<&dyn TemplateEngine>,
) -> HttpResponse {
    let context = ErrorPageContext::new(app_name).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_500.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 500 error template: {}", e);
                fallback_500_html(app_name)
            }
        },
        None => fallback_500_html(app_name),
    };

    no_cache(HttpResponse::build(status)).body(html)
}

fn no_cache(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
    builder
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .insert_header(("Pragma", "no-cache"))
        .insert_header(("Expires", "0"));
    builder
}

fn fallback_403_html(app_name: &str, messages: &[QueuedMessage]) -> String {
    let alerts: String = messages
        .iter()
        .map(|m| format!("<p>{}</p>", html_escape(&m.text)))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html><head><title>403 - Forbidden | {}</title></head>
<body><h1>403 - Forbidden</h1>{}</body></html>"#,
        html_escape(app_name),
        alerts
    )
}

fn fallback_500_html(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>500 - Internal Server Error | {}</title></head>
<body><h1>500 - Internal Server Error</h1></body></html>"#,
        html_escape(app_name)
    )
}
