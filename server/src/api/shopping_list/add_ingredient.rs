use super::list_for_recipe;
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewShoppingListIngredient;
use crate::schema::shopping_list_ingredients;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::plan_append;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddIngredientRequest {
    /// Recipe whose list receives the item
    pub recipe_id: Uuid,
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/shopping-list/ingredient",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = AddIngredientRequest,
    responses(
        (status = 200, description = "Item appended to the recipe's list", body = MessageResponse),
        (status = 400, description = "Name is empty or longer than 255 characters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No list for this recipe", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_ingredient(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AddIngredientRequest>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    conn.transaction::<_, ApiError, _>(|conn| {
        let list = list_for_recipe(conn, user.id, request.recipe_id)?
            .ok_or_else(|| ApiError::not_found("ShoppingList not found"))?;
        let planned = plan_append(list.ingredient_count, &request.name)?;

        diesel::insert_into(shopping_list_ingredients::table)
            .values(&NewShoppingListIngredient {
                shopping_list_id: list.id,
                name: &planned.name,
                note: None,
                is_bought: false,
                sort_order: planned.sort_order,
            })
            .execute(conn)?;
        Ok(())
    })?;

    Ok(MessageResponse::new("ShoppingListIngredient added"))
}
