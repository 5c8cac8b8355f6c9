// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

fn default_field_type() -> String {
    "text".to_string()
}

impl FormField {
    pub fn new(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            label: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Form schema for an article plus the data bound to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleForm {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    data: Map<String, Value>,
}

impl ArticleForm {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            data: Map::new(),
        }
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_attribute(&self, field: &str, attribute: &str) -> Option<&str> {
        self.field(field).and_then(|field| field.attribute(attribute))
    }

    /// Returns false when the form has no such field.
    pub fn set_field_attribute(&mut self, field: &str, attribute: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == field) {
            Some(f) => {
                f.attributes.insert(attribute.to_string(), value.to_string());
                true
            }
            None => {
                log::debug!(
                    "Form '{}' has no field '{}'; attribute '{}' not set",
                    self.name,
                    field,
                    attribute
                );
                false
            }
        }
    }

    /// Binds top-level keys of `data`, replacing earlier bindings with the same key.
    pub fn bind(&mut self, data: Map<String, Value>) {
        for (key, value) in data {
            self.data.insert(key, value);
        }
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn bound(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_form() -> ArticleForm {
        ArticleForm::new("com_content.article")
            .with_field(FormField::new("title", "text"))
            .with_field(
                FormField::new("language", "contentlanguage").with_attribute("default", "*"),
            )
    }

    #[test]
    fn set_field_attribute_updates_existing_field() {
        let mut form = sample_form();
        assert!(form.set_field_attribute("language", "default", "de-DE"));
        assert_eq!(form.field_attribute("language", "default"), Some("de-DE"));
    }

    #[test]
    fn set_field_attribute_ignores_unknown_field() {
        let mut form = sample_form();
        assert!(!form.set_field_attribute("missing", "default", "x"));
        assert!(form.field("missing").is_none());
    }

    #[test]
    fn bind_merges_top_level_keys() {
        let mut form = sample_form();
        let mut first = Map::new();
        first.insert("images".to_string(), json!({ "a": 1 }));
        first.insert("urls".to_string(), Value::Null);
        form.bind(first);

        let mut second = Map::new();
        second.insert("urls".to_string(), json!({ "urla": "https://example.com" }));
        form.bind(second);

        assert_eq!(form.bound("images"), Some(&json!({ "a": 1 })));
        assert_eq!(
            form.bound("urls"),
            Some(&json!({ "urla": "https://example.com" }))
        );
    }

    #[test]
    fn form_schema_deserializes_from_yaml() {
        let yaml = "name: com_content.article\nfields:\n  - name: title\n    label: Title\n  - name: language\n    type: contentlanguage\n    attributes:\n      default: '*'\n";
        let form: ArticleForm = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(form.field("title").map(|f| f.field_type.as_str()), Some("text"));
        assert_eq!(form.field_attribute("language", "default"), Some("*"));
    }
}
