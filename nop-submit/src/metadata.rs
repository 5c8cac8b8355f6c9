// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{AppConfig, SiteNamePlacement};
use crate::i18n::{EDIT_ARTICLE, PAGE_TITLE};
use crate::params::{Params, non_empty};
use crate::services::{DocumentSink, Localizer, MenuEntry};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub heading: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub robots: Option<String>,
}

impl PageMetadata {
    /// Derives page metadata from the merged params. Heading and title defaults
    /// are written back into `params`.
    pub fn compute(
        params: &mut Params,
        menu: Option<&MenuEntry>,
        app: &AppConfig,
        localizer: &dyn Localizer,
    ) -> Self {
        let fallback = localizer.translate(EDIT_ARTICLE);

        let heading_default = match menu {
            Some(menu) => non_empty(&params.page_title)
                .unwrap_or(menu.title.as_str())
                .to_string(),
            None => fallback.clone(),
        };
        let heading = params.def_page_heading(heading_default);

        let title_default = match menu {
            Some(menu) => menu.title.clone(),
            None => fallback,
        };
        let title = params.def_page_title(title_default);

        let title = match app.sitename_pagetitles {
            SiteNamePlacement::None => title,
            SiteNamePlacement::Before => {
                localizer.format(PAGE_TITLE, &[app.name.as_str(), title.as_str()])
            }
            SiteNamePlacement::After => {
                localizer.format(PAGE_TITLE, &[title.as_str(), app.name.as_str()])
            }
        };

        Self {
            title,
            heading,
            description: non_empty(&params.menu_meta_description).map(str::to_string),
            keywords: non_empty(&params.menu_meta_keywords).map(str::to_string),
            robots: non_empty(&params.robots).map(str::to_string),
        }
    }

    pub fn apply(&self, document: &mut dyn DocumentSink) {
        document.set_title(&self.title);
        document.add_breadcrumb(&self.title, "");

        if let Some(description) = &self.description {
            document.set_description(description);
        }
        if let Some(keywords) = &self.keywords {
            document.set_meta_data("keywords", keywords);
        }
        if let Some(robots) = &self.robots {
            document.set_meta_data("robots", robots);
        }
    }
}
