//! External profile links of a chef. A chef keeps at most one link per site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteType {
    Youtube,
    Instagram,
    Tiktok,
    X,
    Facebook,
    Blog,
    Other,
}

impl SiteType {
    pub const ALL: [SiteType; 7] = [
        SiteType::Youtube,
        SiteType::Instagram,
        SiteType::Tiktok,
        SiteType::X,
        SiteType::Facebook,
        SiteType::Blog,
        SiteType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteType::Youtube => "YOUTUBE",
            SiteType::Instagram => "INSTAGRAM",
            SiteType::Tiktok => "TIKTOK",
            SiteType::X => "X",
            SiteType::Facebook => "FACEBOOK",
            SiteType::Blog => "BLOG",
            SiteType::Other => "OTHER",
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteType::ALL
            .into_iter()
            .find(|site| site.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown siteType \"{s}\"")))
    }
}

/// Checks that `site_type` is free among a chef's `existing` links.
///
/// When updating, pass the id of the link being edited as `editing`; a link
/// never conflicts with itself.
pub fn ensure_site_type_available<Id: PartialEq>(
    existing: impl IntoIterator<Item = (Id, SiteType)>,
    site_type: SiteType,
    editing: Option<&Id>,
) -> Result<(), DomainError> {
    let taken = existing
        .into_iter()
        .any(|(id, site)| site == site_type && editing != Some(&id));

    if taken {
        return Err(DomainError::conflict(format!(
            "A {site_type} link already exists for this chef"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_type_round_trip_names() {
        for site in SiteType::ALL {
            assert_eq!(site.as_str().parse::<SiteType>(), Ok(site));
        }
        assert!("youtube".parse::<SiteType>().is_err());
    }

    #[test]
    fn test_create_conflicts_on_same_site() {
        let existing = vec![(1, SiteType::Youtube), (2, SiteType::Instagram)];
        let err = ensure_site_type_available(existing, SiteType::Youtube, None).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn test_create_on_free_site() {
        let existing = vec![(1, SiteType::Youtube)];
        assert!(ensure_site_type_available(existing, SiteType::Blog, None).is_ok());
    }

    #[test]
    fn test_update_keeping_own_site_type() {
        let existing = vec![(1, SiteType::Youtube), (2, SiteType::Instagram)];
        assert!(ensure_site_type_available(existing, SiteType::Youtube, Some(&1)).is_ok());
    }

    #[test]
    fn test_update_into_another_links_site_type() {
        let existing = vec![(1, SiteType::Youtube), (2, SiteType::Instagram)];
        let err =
            ensure_site_type_available(existing, SiteType::Instagram, Some(&1)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
