use crate::api::chefs::get::find_chef;
use crate::api::{ApiError, ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{
    NewRecipe, NewRecipeImage, NewRecipeIngredient, NewRecipeLink, NewRecipeStep,
};
use crate::schema::{recipe_images, recipe_ingredients, recipe_links, recipe_steps, recipes};
use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use kondate_core::{append_positions, RecipeStatus};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::{load_recipe_detail, RecipeDetailResponse};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeStep {
    pub description: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub chef_id: Option<Uuid>,
    pub name: Option<String>,
    pub overview: Option<String>,
    /// Defaults to 1
    pub serving_size: Option<i32>,
    /// Defaults to PUBLIC
    pub status: Option<RecipeStatus>,
    /// Ingredient lines in display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<CreateRecipeStep>,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Reference URLs
    #[serde(default)]
    pub links: Vec<String>,
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect()
}

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body(content = CreateRecipeRequest, example = json!({
        "chefId": "00000000-0000-0000-0000-000000000000",
        "name": "Pancakes",
        "servingSize": 2,
        "ingredients": ["flour", "egg", "milk"]
    })),
    responses(
        (status = 201, description = "Recipe created", body = RecipeDetailResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Chef not found", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
) -> ApiResult<(StatusCode, Json<RecipeDetailResponse>)> {
    let chef_id = request
        .chef_id
        .ok_or_else(|| ApiError::bad_request("chefId is required"))?;
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("name is required"))?;
    let serving_size = request.serving_size.unwrap_or(1);
    if serving_size < 1 {
        return Err(ApiError::bad_request("servingSize must be at least 1"));
    }
    let status = request.status.unwrap_or_default();

    let ingredients = non_blank(&request.ingredients);
    let images = non_blank(&request.images);
    let links = non_blank(&request.links);

    let mut conn = get_conn!(pool);

    let detail = conn.transaction::<_, ApiError, _>(|conn| {
        find_chef(conn, chef_id)?;

        let recipe_id: Uuid = diesel::insert_into(recipes::table)
            .values(&NewRecipe {
                chef_id,
                name,
                overview: request.overview.as_deref(),
                serving_size,
                status: status.as_str(),
            })
            .returning(recipes::id)
            .get_result(conn)?;

        let new_ingredients: Vec<NewRecipeIngredient> = append_positions(0, ingredients.len())
            .zip(ingredients.iter().copied())
            .map(|(sort_order, text)| NewRecipeIngredient {
                recipe_id,
                text,
                sort_order,
            })
            .collect();
        if !new_ingredients.is_empty() {
            diesel::insert_into(recipe_ingredients::table)
                .values(&new_ingredients)
                .execute(conn)?;
        }

        let new_steps: Vec<NewRecipeStep> = append_positions(0, request.steps.len())
            .zip(&request.steps)
            .map(|(step_order, step)| NewRecipeStep {
                recipe_id,
                step_order,
                description: &step.description,
                note: step.note.as_deref(),
            })
            .collect();
        if !new_steps.is_empty() {
            diesel::insert_into(recipe_steps::table)
                .values(&new_steps)
                .execute(conn)?;
        }

        let new_images: Vec<NewRecipeImage> = images
            .iter()
            .copied()
            .map(|image_url| NewRecipeImage {
                recipe_id,
                image_url,
            })
            .collect();
        if !new_images.is_empty() {
            diesel::insert_into(recipe_images::table)
                .values(&new_images)
                .execute(conn)?;
        }

        let new_links: Vec<NewRecipeLink> = links
            .iter()
            .copied()
            .map(|url| NewRecipeLink { recipe_id, url })
            .collect();
        if !new_links.is_empty() {
            diesel::insert_into(recipe_links::table)
                .values(&new_links)
                .execute(conn)?;
        }

        load_recipe_detail(conn, recipe_id)
    })?;

    tracing::info!(
        recipe_id = %detail.recipe.id,
        ingredients = detail.ingredients.len(),
        "Recipe created"
    );

    Ok((StatusCode::CREATED, Json(detail)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_trims_and_drops_empty() {
        let values = vec![" flour ".to_string(), "   ".to_string(), "egg".to_string()];
        assert_eq!(non_blank(&values), vec!["flour", "egg"]);
    }

    #[test]
    fn test_request_defaults() {
        let request: CreateRecipeRequest =
            serde_json::from_str(r#"{"chefId": null, "name": "Soup"}"#).unwrap();
        assert!(request.ingredients.is_empty());
        assert!(request.steps.is_empty());
        assert_eq!(request.status, None);
    }
}
