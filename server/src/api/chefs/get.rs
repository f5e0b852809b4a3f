use crate::api::recipes::list::RecipeResponse;
use crate::api::{ApiError, ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Chef, Recipe};
use crate::schema::{chefs, follows, recipes};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use kondate_core::ChefRole;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChefResponse {
    pub id: Uuid,
    pub role: ChefRole,
    /// Set only for USER chefs
    pub user_id: Option<Uuid>,
    pub name: String,
    pub profile: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Chef> for ChefResponse {
    type Error = ApiError;

    fn try_from(chef: Chef) -> Result<Self, Self::Error> {
        let kind = chef
            .kind()
            .map_err(|e| ApiError::Internal(format!("Chef {} is malformed: {}", chef.id, e)))?;

        Ok(ChefResponse {
            id: chef.id,
            role: kind.role(),
            user_id: kind.user_id(),
            name: chef.name,
            profile: chef.profile,
            image_url: chef.image_url,
            created_at: chef.created_at,
            updated_at: chef.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChefDetailResponse {
    #[serde(flatten)]
    pub chef: ChefResponse,
    pub recipes: Vec<RecipeResponse>,
    pub recipe_count: i64,
    pub follower_count: i64,
}

/// Loads a chef or fails with "Chef not found".
pub fn find_chef(conn: &mut PgConnection, chef_id: Uuid) -> ApiResult<Chef> {
    chefs::table
        .filter(chefs::id.eq(chef_id))
        .select(Chef::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Chef not found"))
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/{id}",
    tag = "chefs",
    params(
        ("id" = Uuid, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Chef with recipes and counts", body = ChefDetailResponse),
        (status = 404, description = "Chef not found", body = ErrorResponse)
    )
)]
pub async fn get_chef(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ChefDetailResponse>> {
    let mut conn = get_conn!(pool);

    let chef = find_chef(&mut conn, id)?;

    let chef_recipes: Vec<Recipe> = recipes::table
        .filter(recipes::chef_id.eq(id))
        .order(recipes::created_at.desc())
        .select(Recipe::as_select())
        .load(&mut conn)?;

    let follower_count: i64 = follows::table
        .filter(follows::chef_id.eq(id))
        .count()
        .get_result(&mut conn)?;

    let recipes = chef_recipes
        .into_iter()
        .map(RecipeResponse::try_from)
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(ChefDetailResponse {
        chef: ChefResponse::try_from(chef)?,
        recipe_count: recipes.len() as i64,
        recipes,
        follower_count,
    }))
}
