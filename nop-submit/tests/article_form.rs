// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use common::{SITE_CONFIG, TestSite, actor, html};
use nop_submit::params::Params;
use nop_submit::presenter::{FormError, ViewResponse};
use nop_submit::response::into_http_response;
use nop_submit::services::MenuEntry;
use nop_submit::util::{MemoryModel, MemoryTags};
use serde_json::json;

fn params(value: serde_json::Value) -> Params {
    serde_json::from_value(value).unwrap()
}

fn editable(id: u64) -> MemoryModel {
    MemoryModel::existing_article(id).with_item_params(params(json!({ "access-edit": true })))
}

#[test]
fn editor_gets_localized_submission_form() {
    let site = TestSite::new(SITE_CONFIG);
    let rendered = site.display(&MemoryModel::new_article(), &actor(7, &["editor"]), None);

    let page = html(&rendered);
    assert!(page.contains("<title>Demo - Modifier un article</title>"));
    assert!(page.contains("<h1>Modifier un article</h1>"));
    assert!(page.contains(r#"name="jform[language]" value="fr-FR""#));
    assert!(page.contains(r#"class="control-group captcha""#));
    assert!(page.contains(">Enregistrer</button>"));
    assert!(page.contains(r#"<html lang="fr-FR">"#));

    assert_eq!(rendered.document.title(), "Demo - Modifier un article");
    assert_eq!(rendered.document.breadcrumbs().len(), 1);
    assert_eq!(rendered.response.status(), None);
}

#[test]
fn category_author_may_submit() {
    let site = TestSite::new(SITE_CONFIG);
    let rendered = site.display(&MemoryModel::new_article(), &actor(8, &["author"]), None);
    html(&rendered);
}

#[test]
fn actor_without_grants_is_turned_away() {
    let site = TestSite::new(SITE_CONFIG);
    let rendered = site.display(&MemoryModel::new_article(), &actor(9, &["reader"]), None);

    assert!(matches!(rendered.result, Ok(ViewResponse::Denied(_))));
    assert_eq!(rendered.response.status(), Some(403));
    assert_eq!(rendered.document.title(), "");
}

#[actix_web::test]
async fn denied_request_maps_to_forbidden_page() {
    let site = TestSite::new(SITE_CONFIG);
    let rendered = site.display(&MemoryModel::new_article(), &actor(0, &["editor"]), None);

    let response = into_http_response(
        rendered.result,
        &rendered.response,
        &site.config.app.name,
        Some(&site.engine),
    );
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = to_bytes(response.into_body()).await.unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("You are not authorised to view this resource."));
}

#[test]
fn editing_existing_article_renders_bound_data_and_tags() {
    let mut site = TestSite::new(SITE_CONFIG);
    site.tags = MemoryTags::default().with_tag(5, 3, "Science");
    let model = editable(5)
        .with_images(r#"{"a":1}"#)
        .with_page_params(params(json!({ "pageclass_sfx": "<b>" })));

    let rendered = site.display(&model, &actor(7, &["reader"]), None);
    let page = html(&rendered);

    assert!(page.contains(r#"class="edit item-page&lt;b&gt;""#));
    assert!(!page.contains("&amp;lt;b"));
    assert!(page.contains(r#"<li data-tag-id="3">Science</li>"#));
    assert!(page.contains(r#"name="jform[images]""#));
    assert!(page.contains(r#""a":1"#));
    assert!(!page.contains(r#"name="jform[urls]""#));
    assert!(page.contains(r#"name="jform[title]" value="Article 5""#));
    assert!(page.contains(r#"name="jform[language]" value="*""#));
}

#[test]
fn menu_entry_and_meta_params_reach_the_page() {
    let site = TestSite::new(SITE_CONFIG);
    let menu = MenuEntry {
        id: 4,
        title: "Write for us".to_string(),
    };
    let model = editable(5).with_page_params(params(json!({
        "menu-meta_description": "Share your story",
        "robots": "noindex, nofollow"
    })));

    let rendered = site.display(&model, &actor(7, &["editor"]), Some(&menu));
    let page = html(&rendered);

    assert!(page.contains("<title>Demo - Write for us</title>"));
    assert!(page.contains(r#"<meta name="description" content="Share your story">"#));
    assert!(page.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
    assert!(!page.contains(r#"name="keywords""#));
    assert_eq!(rendered.document.description(), Some("Share your story"));
}

#[actix_web::test]
async fn model_errors_map_to_internal_server_error() {
    let site = TestSite::new(SITE_CONFIG);
    let model = MemoryModel::new_article().with_error("Unable to load category");
    let rendered = site.display(&model, &actor(7, &["editor"]), None);

    match &rendered.result {
        Err(FormError::ModelLoad(errors)) => {
            assert_eq!(errors, &vec!["Unable to load category".to_string()])
        }
        other => panic!("expected model error, got {:?}", other),
    }

    let response = into_http_response(
        rendered.result,
        &rendered.response,
        &site.config.app.name,
        Some(&site.engine),
    );
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn rendered_form_is_served_as_html() {
    let site = TestSite::new(SITE_CONFIG);
    let rendered = site.display(&MemoryModel::new_article(), &actor(7, &["editor"]), None);

    let response = into_http_response(
        rendered.result,
        &rendered.response,
        &site.config.app.name,
        Some(&site.engine),
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
}
