use crate::api::{ApiError, ApiResult};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::{likes, recipes};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use diesel::dsl::count;
use diesel::prelude::*;
use kondate_core::{DomainError, RecipeStatus};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: Uuid,
    pub chef_id: Uuid,
    pub name: String,
    pub overview: Option<String>,
    pub serving_size: i32,
    pub status: RecipeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Recipe> for RecipeResponse {
    type Error = ApiError;

    fn try_from(recipe: Recipe) -> Result<Self, Self::Error> {
        let status = recipe
            .status
            .parse::<RecipeStatus>()
            .map_err(|e: DomainError| ApiError::Internal(format!("Recipe {}: {}", recipe.id, e)))?;

        Ok(RecipeResponse {
            id: recipe.id,
            chef_id: recipe.chef_id,
            name: recipe.name,
            overview: recipe.overview,
            serving_size: recipe.serving_size,
            status,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    #[serde(flatten)]
    pub recipe: RecipeResponse,
    pub like_count: i64,
}

/// Attaches like counts to already loaded recipes, keeping their order.
pub fn with_like_counts(
    conn: &mut PgConnection,
    rows: Vec<Recipe>,
) -> ApiResult<Vec<RecipeSummary>> {
    let ids: Vec<Uuid> = rows.iter().map(|recipe| recipe.id).collect();

    let like_counts: HashMap<Uuid, i64> = likes::table
        .filter(likes::recipe_id.eq_any(&ids))
        .group_by(likes::recipe_id)
        .select((likes::recipe_id, count(likes::id)))
        .load::<(Uuid, i64)>(conn)?
        .into_iter()
        .collect();

    rows.into_iter()
        .map(|recipe| {
            let like_count = like_counts.get(&recipe.id).copied().unwrap_or(0);
            Ok(RecipeSummary {
                recipe: RecipeResponse::try_from(recipe)?,
                like_count,
            })
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, newest first, with like counts", body = Vec<RecipeSummary>)
    )
)]
pub async fn list_recipes(State(pool): State<Arc<DbPool>>) -> ApiResult<Json<Vec<RecipeSummary>>> {
    let mut conn = get_conn!(pool);

    let rows: Vec<Recipe> = recipes::table
        .order((recipes::created_at.desc(), recipes::id.asc()))
        .select(Recipe::as_select())
        .load(&mut conn)?;

    Ok(Json(with_like_counts(&mut conn, rows)?))
}
