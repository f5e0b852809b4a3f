use super::list_for_recipe;
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewShoppingList, NewShoppingListIngredient};
use crate::ordering::ShoppingListScope;
use crate::schema::{recipe_ingredients, recipes, shopping_list_ingredients, shopping_lists};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::{next_position, plan_merge, IngredientSelection, MergeTarget};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFromRecipeRequest {
    pub recipe_id: Uuid,
    /// Required unless `addAll` is set
    pub recipe_ingredient_id: Option<Uuid>,
    /// Copy every ingredient of the recipe
    #[serde(default, alias = "addAllFlg")]
    pub add_all: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/shopping-list",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = AddFromRecipeRequest,
    responses(
        (status = 200, description = "Ingredients added, starting a list for the recipe if needed", body = MessageResponse),
        (status = 400, description = "Missing ingredient id or recipe without ingredients", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe or ingredient not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_from_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AddFromRecipeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let selection =
        IngredientSelection::from_request(request.add_all, request.recipe_ingredient_id)?;
    let mut conn = get_conn!(pool);

    let (list_id, added) = conn.transaction::<_, ApiError, _>(|conn| {
        let recipe_name: String = recipes::table
            .filter(recipes::id.eq(request.recipe_id))
            .select(recipes::name)
            .first(conn)
            .optional()?
            .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

        let names: Vec<String> = match selection {
            IngredientSelection::All => recipe_ingredients::table
                .filter(recipe_ingredients::recipe_id.eq(request.recipe_id))
                .order(recipe_ingredients::sort_order.asc())
                .select(recipe_ingredients::text)
                .load(conn)?,
            IngredientSelection::Single(ingredient_id) => {
                let text: String = recipe_ingredients::table
                    .filter(recipe_ingredients::id.eq(ingredient_id))
                    .filter(recipe_ingredients::recipe_id.eq(request.recipe_id))
                    .select(recipe_ingredients::text)
                    .first(conn)
                    .optional()?
                    .ok_or_else(|| ApiError::not_found("RecipeIngredient not found"))?;
                vec![text]
            }
        };

        let existing = list_for_recipe(conn, user.id, request.recipe_id)?;
        let plan = plan_merge(existing, names)?;

        let list_id = match plan.target {
            MergeTarget::Append(id) => id,
            MergeTarget::Create => {
                let sort_order = next_position(ShoppingListScope::new(conn, user.id).count()?);
                let id: Uuid = diesel::insert_into(shopping_lists::table)
                    .values(&NewShoppingList {
                        user_id: user.id,
                        recipe_id: Some(request.recipe_id),
                        name: &recipe_name,
                        sort_order,
                    })
                    .returning(shopping_lists::id)
                    .get_result(conn)?;
                tracing::info!(user_id = %user.id, list_id = %id, "Shopping list started");
                id
            }
        };

        let rows: Vec<NewShoppingListIngredient> = plan
            .ingredients
            .iter()
            .map(|ingredient| NewShoppingListIngredient {
                shopping_list_id: list_id,
                name: &ingredient.name,
                note: None,
                is_bought: false,
                sort_order: ingredient.sort_order,
            })
            .collect();

        diesel::insert_into(shopping_list_ingredients::table)
            .values(&rows)
            .execute(conn)?;

        Ok((list_id, rows.len()))
    })?;

    tracing::debug!(list_id = %list_id, added, "Recipe ingredients added to shopping list");

    Ok(MessageResponse::new("ShoppingList added"))
}
