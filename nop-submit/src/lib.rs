// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod access;
pub mod article;
pub mod config;
pub mod document;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod metadata;
pub mod params;
pub mod plugins;
pub mod presenter;
pub mod response;
pub mod services;
pub mod templates;
pub mod util;

pub use presenter::{
    ArticleFormPresenter, AuthorizationFailure, FormError, FormOutcome, FormRequestContext,
    HtmlView, PreparedView, ViewResponse,
};
