use crate::api::recipes::list::RecipeResponse;
use crate::api::{ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::get::find_chef;

#[utoipa::path(
    get,
    path = "/api/v1/chefs/{id}/recipes",
    tag = "chefs",
    params(
        ("id" = Uuid, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Recipes of the chef, newest first", body = Vec<RecipeResponse>),
        (status = 404, description = "Chef not found", body = ErrorResponse)
    )
)]
pub async fn list_chef_recipes(
    State(pool): State<Arc<DbPool>>,
    Path(chef_id): Path<Uuid>,
) -> ApiResult<Json<Vec<RecipeResponse>>> {
    let mut conn = get_conn!(pool);

    find_chef(&mut conn, chef_id)?;

    let rows: Vec<Recipe> = recipes::table
        .filter(recipes::chef_id.eq(chef_id))
        .order(recipes::created_at.desc())
        .select(Recipe::as_select())
        .load(&mut conn)?;

    let recipes = rows
        .into_iter()
        .map(RecipeResponse::try_from)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(recipes))
}
