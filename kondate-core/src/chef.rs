//! Chef profiles and their validation rules.
//!
//! A chef is either backed by a registered user (role `USER`) or stands on its
//! own (role `CHEF`). Only the first kind carries a user id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

const MISSING_NAME_OR_ROLE: &str = "Name, and role are required";
const MISSING_USER_ID: &str = "Name, and role and userId are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum ChefRole {
    User,
    Chef,
}

impl ChefRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChefRole::User => "USER",
            ChefRole::Chef => "CHEF",
        }
    }
}

impl fmt::Display for ChefRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChefRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(ChefRole::User),
            "CHEF" => Ok(ChefRole::Chef),
            other => Err(DomainError::validation(format!(
                "Role must be USER or CHEF, got \"{other}\""
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChefKind {
    /// Profile of a registered user.
    Linked { user_id: Uuid },
    Standalone,
}

impl ChefKind {
    pub fn role(&self) -> ChefRole {
        match self {
            ChefKind::Linked { .. } => ChefRole::User,
            ChefKind::Standalone => ChefRole::Chef,
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            ChefKind::Linked { user_id } => Some(*user_id),
            ChefKind::Standalone => None,
        }
    }

    /// Rebuilds the kind from stored columns.
    pub fn from_columns(role: &str, user_id: Option<Uuid>) -> Result<Self, DomainError> {
        match (role.parse::<ChefRole>()?, user_id) {
            (ChefRole::User, Some(user_id)) => Ok(ChefKind::Linked { user_id }),
            (ChefRole::User, None) => Err(DomainError::validation(MISSING_USER_ID)),
            (ChefRole::Chef, _) => Ok(ChefKind::Standalone),
        }
    }
}

/// A chef that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefDraft {
    pub name: String,
    pub kind: ChefKind,
    pub profile: Option<String>,
    pub image_url: Option<String>,
}

impl ChefDraft {
    /// Validates the raw fields of a create request.
    ///
    /// Name and role are always required; a `USER` chef also needs the id of
    /// the user it belongs to.
    pub fn new(
        name: Option<&str>,
        role: Option<&str>,
        user_id: Option<Uuid>,
        profile: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let role = role.map(str::trim).filter(|r| !r.is_empty());

        let (Some(name), Some(role)) = (name, role) else {
            if role == Some(ChefRole::User.as_str()) && user_id.is_none() {
                return Err(DomainError::validation(MISSING_USER_ID));
            }
            return Err(DomainError::validation(MISSING_NAME_OR_ROLE));
        };

        let kind = match role.parse::<ChefRole>()? {
            ChefRole::User => ChefKind::Linked {
                user_id: user_id.ok_or_else(|| DomainError::validation(MISSING_USER_ID))?,
            },
            ChefRole::Chef => ChefKind::Standalone,
        };

        Ok(ChefDraft {
            name: name.to_string(),
            kind,
            profile: non_empty(profile),
            image_url: non_empty(image_url),
        })
    }
}

/// Validates the name sent with an update.
pub fn required_name(name: Option<&str>) -> Result<String, DomainError> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DomainError::validation("Name is required"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_chef() {
        let draft = ChefDraft::new(Some("Kenji"), Some("CHEF"), None, None, None).unwrap();
        assert_eq!(draft.kind, ChefKind::Standalone);
        assert_eq!(draft.kind.role(), ChefRole::Chef);
        assert_eq!(draft.kind.user_id(), None);
    }

    #[test]
    fn test_user_chef_keeps_user_id() {
        let user_id = Uuid::new_v4();
        let draft = ChefDraft::new(
            Some("Alice Chef"),
            Some("USER"),
            Some(user_id),
            Some("profile".to_string()),
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(draft.kind, ChefKind::Linked { user_id });
        assert_eq!(draft.profile.as_deref(), Some("profile"));
        assert_eq!(draft.image_url, None);
    }

    #[test]
    fn test_user_chef_without_user_id() {
        let err = ChefDraft::new(Some("Alice"), Some("USER"), None, None, None).unwrap_err();
        assert_eq!(err, DomainError::Validation(MISSING_USER_ID.to_string()));

        let err = ChefDraft::new(None, Some("USER"), None, None, None).unwrap_err();
        assert_eq!(err, DomainError::Validation(MISSING_USER_ID.to_string()));
    }

    #[test]
    fn test_missing_name_or_role() {
        let err = ChefDraft::new(None, Some("CHEF"), None, None, None).unwrap_err();
        assert_eq!(err, DomainError::Validation(MISSING_NAME_OR_ROLE.to_string()));

        let err = ChefDraft::new(Some("  "), None, None, None, None).unwrap_err();
        assert_eq!(err, DomainError::Validation(MISSING_NAME_OR_ROLE.to_string()));
    }

    #[test]
    fn test_unknown_role() {
        let err = ChefDraft::new(Some("Bob"), Some("ADMIN"), None, None, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_from_columns() {
        let user_id = Uuid::new_v4();
        assert_eq!(
            ChefKind::from_columns("USER", Some(user_id)),
            Ok(ChefKind::Linked { user_id })
        );
        assert_eq!(
            ChefKind::from_columns("CHEF", None),
            Ok(ChefKind::Standalone)
        );
        assert!(ChefKind::from_columns("USER", None).is_err());
    }

    #[test]
    fn test_required_name() {
        assert_eq!(required_name(Some(" Mio ")), Ok("Mio".to_string()));
        assert!(required_name(Some("")).is_err());
        assert!(required_name(None).is_err());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&ChefRole::User).unwrap(), "\"USER\"");
        let role: ChefRole = serde_json::from_str("\"CHEF\"").unwrap();
        assert_eq!(role, ChefRole::Chef);
    }
}
