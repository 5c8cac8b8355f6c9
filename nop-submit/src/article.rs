// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::params::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub type CategoryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<ArticleId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub catid: Option<CategoryId>,
    #[serde(default)]
    pub params: Params,
    /// Serialized JSON as stored by the model.
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub urls: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

impl Article {
    /// The id of a stored article. A missing or zero id means a new article.
    pub fn existing_id(&self) -> Option<ArticleId> {
        self.id.filter(|id| id.0 != 0)
    }

    pub fn is_new(&self) -> bool {
        self.existing_id().is_none()
    }
}

/// Decodes one of the serialized article columns. Empty or malformed input
/// yields `Value::Null`.
pub fn decode_serialized_field(field: &str, raw: Option<&str>) -> Value {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Value::Null;
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring malformed article {} JSON: {}", field, err);
            Value::Null
        }
    }
}
