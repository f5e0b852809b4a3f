use crate::api::{ApiError, ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Recipe, RecipeImage, RecipeIngredient, RecipeLink, RecipeStep};
use crate::schema::{likes, recipe_images, recipe_ingredients, recipe_links, recipe_steps, recipes};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::list::RecipeResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeImageResponse {
    pub id: Uuid,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepResponse {
    pub id: Uuid,
    pub step_order: i32,
    pub description: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientResponse {
    pub id: Uuid,
    pub text: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLinkResponse {
    pub id: Uuid,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailResponse {
    #[serde(flatten)]
    pub recipe: RecipeResponse,
    pub like_count: i64,
    pub images: Vec<RecipeImageResponse>,
    pub steps: Vec<RecipeStepResponse>,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub links: Vec<RecipeLinkResponse>,
}

/// Loads a recipe with everything it owns.
pub fn load_recipe_detail(conn: &mut PgConnection, id: Uuid) -> ApiResult<RecipeDetailResponse> {
    let recipe: Recipe = recipes::table
        .filter(recipes::id.eq(id))
        .select(Recipe::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

    let like_count: i64 = likes::table
        .filter(likes::recipe_id.eq(id))
        .count()
        .get_result(conn)?;

    let images = recipe_images::table
        .filter(recipe_images::recipe_id.eq(id))
        .order(recipe_images::created_at.asc())
        .select(RecipeImage::as_select())
        .load::<RecipeImage>(conn)?
        .into_iter()
        .map(|image| RecipeImageResponse {
            id: image.id,
            image_url: image.image_url,
        })
        .collect();

    let steps = recipe_steps::table
        .filter(recipe_steps::recipe_id.eq(id))
        .order(recipe_steps::step_order.asc())
        .select(RecipeStep::as_select())
        .load::<RecipeStep>(conn)?
        .into_iter()
        .map(|step| RecipeStepResponse {
            id: step.id,
            step_order: step.step_order,
            description: step.description,
            note: step.note,
        })
        .collect();

    let ingredients = recipe_ingredients::table
        .filter(recipe_ingredients::recipe_id.eq(id))
        .order(recipe_ingredients::sort_order.asc())
        .select(RecipeIngredient::as_select())
        .load::<RecipeIngredient>(conn)?
        .into_iter()
        .map(|ingredient| RecipeIngredientResponse {
            id: ingredient.id,
            text: ingredient.text,
            sort_order: ingredient.sort_order,
        })
        .collect();

    let links = recipe_links::table
        .filter(recipe_links::recipe_id.eq(id))
        .select(RecipeLink::as_select())
        .load::<RecipeLink>(conn)?
        .into_iter()
        .map(|link| RecipeLinkResponse {
            id: link.id,
            url: link.url,
        })
        .collect();

    Ok(RecipeDetailResponse {
        recipe: RecipeResponse::try_from(recipe)?,
        like_count,
        images,
        steps,
        ingredients,
        links,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe with images, steps, ingredients and links", body = RecipeDetailResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<RecipeDetailResponse>> {
    let mut conn = get_conn!(pool);
    Ok(Json(load_recipe_detail(&mut conn, id)?))
}
