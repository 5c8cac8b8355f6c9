// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::LanguageConfig;
use crate::services::Localizer;
use std::collections::HashMap;

pub const NOT_AUTHORISED: &str = "JERROR_ALERTNOAUTHOR";
pub const EDIT_ARTICLE: &str = "COM_CONTENT_FORM_EDIT_ARTICLE";
pub const PAGE_TITLE: &str = "JPAGETITLE";
pub const SAVE: &str = "JSAVE";
pub const CANCEL: &str = "JCANCEL";
pub const TAGS: &str = "JTAG";
pub const CAPTCHA_LABEL: &str = "COM_CONTENT_CAPTCHA_LABEL";

const BUILTIN_STRINGS: &[(&str, &str)] = &[
    (NOT_AUTHORISED, "You are not authorised to view this resource."),
    (EDIT_ARTICLE, "Edit an article"),
    (PAGE_TITLE, "%1$s - %2$s"),
    (SAVE, "Save"),
    (CANCEL, "Cancel"),
    (TAGS, "Tags"),
    (CAPTCHA_LABEL, "Captcha"),
];

/// Translation catalog for one language: built-in strings plus configured overrides.
#[derive(Debug, Clone)]
pub struct Catalog {
    tag: String,
    strings: HashMap<String, String>,
}

impl Catalog {
    pub fn new(tag: &str) -> Self {
        let strings = BUILTIN_STRINGS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            tag: tag.to_string(),
            strings,
        }
    }

    pub fn from_config(config: &LanguageConfig) -> Self {
        let mut catalog = Self::new(&config.tag);
        for (key, value) in &config.strings {
            catalog.strings.insert(key.clone(), value.clone());
        }
        catalog
    }
}

impl Localizer for Catalog {
    fn current_language_tag(&self) -> &str {
        &self.tag
    }

    fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, key: &str, args: &[&str]) -> String {
        substitute(&self.translate(key), args)
    }
}

/// Replaces `%s`, positional `%N$s` and `%%` in `template`. Missing arguments
/// render as empty; anything else after `%` is kept literally.
pub fn substitute(template: &str, args: &[&str]) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match chars.get(i + 1) {
            Some('%') => {
                out.push('%');
                i += 2;
            }
            Some('s') => {
                out.push_str(args.get(next_arg).copied().unwrap_or(""));
                next_arg += 1;
                i += 2;
            }
            Some(c) if c.is_ascii_digit() => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end].is_ascii_digit() {
                    end += 1;
                }
                if chars.get(end) == Some(&'$') && chars.get(end + 1) == Some(&'s') {
                    let position: usize = chars[start..end]
                        .iter()
                        .collect::<String>()
                        .parse()
                        .unwrap_or(0);
                    if let Some(arg) = position.checked_sub(1).and_then(|index| args.get(index)) {
                        out.push_str(arg);
                    }
                    i = end + 2;
                } else {
                    out.push('%');
                    i += 1;
                }
            }
            _ => {
                out.push('%');
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn page_title_template_orders_arguments() {
        let catalog = Catalog::new("en-GB");
        assert_eq!(catalog.format(PAGE_TITLE, &["Demo", "Article"]), "Demo - Article");
        assert_eq!(catalog.format(PAGE_TITLE, &["Article", "Demo"]), "Article - Demo");
    }

    #[test]
    fn unknown_keys_translate_to_themselves() {
        let catalog = Catalog::new("en-GB");
        assert_eq!(catalog.translate("COM_UNKNOWN"), "COM_UNKNOWN");
    }

    #[test]
    fn configured_strings_override_builtins() {
        let mut strings = BTreeMap::new();
        strings.insert(PAGE_TITLE.to_string(), "%2$s | %1$s".to_string());
        let catalog = Catalog::from_config(&LanguageConfig {
            tag: "de-DE".to_string(),
            strings,
        });
        assert_eq!(catalog.current_language_tag(), "de-DE");
        assert_eq!(catalog.format(PAGE_TITLE, &["Demo", "Artikel"]), "Artikel | Demo");
    }

    #[test]
    fn substitute_handles_sequential_and_literal_percent() {
        assert_eq!(substitute("%s of %s (100%%)", &["1", "2"]), "1 of 2 (100%)");
        assert_eq!(substitute("%d stays", &["x"]), "%d stays");
        assert_eq!(substitute("%3$s|%s", &["a"]), "|a");
        assert_eq!(substitute("trailing %", &[]), "trailing %");
    }
}
