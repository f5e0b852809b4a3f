use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Publication state of a recipe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum RecipeStatus {
    #[default]
    Public,
    Private,
    Draft,
}

impl RecipeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeStatus::Public => "PUBLIC",
            RecipeStatus::Private => "PRIVATE",
            RecipeStatus::Draft => "DRAFT",
        }
    }
}

impl fmt::Display for RecipeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(RecipeStatus::Public),
            "PRIVATE" => Ok(RecipeStatus::Private),
            "DRAFT" => Ok(RecipeStatus::Draft),
            other => Err(DomainError::validation(format!(
                "Unknown recipe status \"{other}\""
            ))),
        }
    }
}
