// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::article::CategoryId;
use crate::config::AccessConfig;
use crate::services::{Actor, Authorizer, Capability};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

pub const ADMIN_ROLE: &str = "admin";
pub const MAX_ROLE_COUNT: usize = 64;
pub const MAX_ROLE_CHARS: usize = 64;

#[derive(Debug)]
pub struct RoleValidationError {
    message: String,
}

impl RoleValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RoleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for RoleValidationError {}

pub fn normalize_role(role: &str) -> Result<String, RoleValidationError> {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        return Err(RoleValidationError::new("Role names must not be empty"));
    }
    if trimmed.chars().count() > MAX_ROLE_CHARS {
        return Err(RoleValidationError::new(format!(
            "Role '{}' exceeds {} characters",
            trimmed, MAX_ROLE_CHARS
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(RoleValidationError::new(format!(
            "Role '{}' contains invalid characters",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

pub fn normalize_roles(roles: &[String]) -> Result<Vec<String>, RoleValidationError> {
    if roles.len() > MAX_ROLE_COUNT {
        return Err(RoleValidationError::new(format!(
            "At most {} roles may be listed",
            MAX_ROLE_COUNT
        )));
    }
    let mut normalized: Vec<String> = Vec::with_capacity(roles.len());
    for role in roles {
        let role = normalize_role(role)?;
        if !normalized.contains(&role) {
            normalized.push(role);
        }
    }
    Ok(normalized)
}

/// Role based authorization for article submission.
///
/// `admin` may do anything. Creating is granted component wide to
/// `create_roles` and per category to `category_create_roles`; every other
/// capability is reserved to `admin`.
#[derive(Debug, Clone)]
pub struct RoleAuthorizer {
    create_roles: Vec<String>,
    category_create_roles: BTreeMap<CategoryId, Vec<String>>,
}

impl RoleAuthorizer {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            create_roles: config.create_roles.clone(),
            category_create_roles: config.category_create_roles.clone(),
        }
    }

    fn holds_any(actor: &Actor, roles: &[String]) -> bool {
        actor.has_role(ADMIN_ROLE) || roles.iter().any(|role| actor.has_role(role))
    }
}

impl Authorizer for RoleAuthorizer {
    fn actor_can(&self, actor: &Actor, capability: Capability, asset: &str) -> bool {
        if actor.is_guest() {
            return false;
        }
        if actor.has_role(ADMIN_ROLE) {
            return true;
        }
        match (capability, category_of_asset(asset)) {
            (Capability::Create, Some(category_id)) => self
                .category_create_roles
                .get(&category_id)
                .is_some_and(|roles| Self::holds_any(actor, roles)),
            (Capability::Create, None) => Self::holds_any(actor, &self.create_roles),
        }
    }

    fn authorized_categories(
        &self,
        actor: &Actor,
        component: &str,
        capability: Capability,
    ) -> Vec<CategoryId> {
        if actor.is_guest() {
            return Vec::new();
        }
        self.category_create_roles
            .iter()
            .filter(|(category_id, _)| {
                self.actor_can(
                    actor,
                    capability,
                    &format!("{}.category.{}", component, category_id),
                )
            })
            .map(|(category_id, _)| *category_id)
            .collect()
    }
}

/// Parses `<component>.category.<id>` asset names.
fn category_of_asset(asset: &str) -> Option<CategoryId> {
    let (_, id) = asset.rsplit_once(".category.")?;
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(roles: &[&str]) -> Actor {
        Actor {
            id: 42,
            name: "Ada".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn authorizer() -> RoleAuthorizer {
        let mut category_create_roles = BTreeMap::new();
        category_create_roles.insert(12, vec!["author".to_string()]);
        category_create_roles.insert(14, vec!["editor".to_string()]);
        RoleAuthorizer::new(&AccessConfig {
            create_roles: vec!["editor".to_string()],
            category_create_roles,
        })
    }

    #[test]
    fn normalize_roles_trims_and_deduplicates() {
        let roles = vec![" editor".to_string(), "editor ".to_string(), "a_b-c".to_string()];
        assert_eq!(
            normalize_roles(&roles).unwrap(),
            vec!["editor".to_string(), "a_b-c".to_string()]
        );
    }

    #[test]
    fn normalize_role_rejects_invalid_names() {
        assert!(normalize_role("").is_err());
        assert!(normalize_role("no spaces").is_err());
        assert!(normalize_role(&"x".repeat(MAX_ROLE_CHARS + 1)).is_err());
    }

    #[test]
    fn component_create_follows_create_roles() {
        let auth = authorizer();
        assert!(auth.actor_can(&actor(&["editor"]), Capability::Create, "com_content"));
        assert!(!auth.actor_can(&actor(&["author"]), Capability::Create, "com_content"));
        assert!(auth.actor_can(&actor(&["admin"]), Capability::Create, "com_content"));
    }

    #[test]
    fn guests_are_never_authorized() {
        let auth = authorizer();
        let mut guest = Actor::guest();
        guest.roles.push("admin".to_string());
        assert!(!auth.actor_can(&guest, Capability::Create, "com_content"));
        assert!(
            auth.authorized_categories(&guest, "com_content", Capability::Create)
                .is_empty()
        );
    }

    #[test]
    fn authorized_categories_lists_category_grants() {
        let auth = authorizer();
        assert_eq!(
            auth.authorized_categories(&actor(&["author"]), "com_content", Capability::Create),
            vec![12]
        );
        assert_eq!(
            auth.authorized_categories(&actor(&["admin"]), "com_content", Capability::Create),
            vec![12, 14]
        );
        assert!(
            auth.authorized_categories(&actor(&["viewer"]), "com_content", Capability::Create)
                .is_empty()
        );
    }

    #[test]
    fn category_grants_do_not_extend_to_the_component() {
        let auth = authorizer();
        let author = actor(&["author"]);
        assert!(auth.actor_can(&author, Capability::Create, "com_content.category.12"));
        assert!(!auth.actor_can(&author, Capability::Create, "com_content.category.14"));
        assert!(!auth.actor_can(&author, Capability::Create, "com_content"));
    }
}
