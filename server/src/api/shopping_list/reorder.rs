use super::{find_owned_ingredient, find_owned_list};
use crate::api::{parse_direction, ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::ordering::{IngredientScope, ShoppingListScope};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::{move_item, MoveOutcome, Positioned};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/shopping-list-ingredients/{id}/move/{position}",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Shopping list ingredient ID"),
        ("position" = String, Path, description = "\"up\" or \"down\"")
    ),
    responses(
        (status = 200, description = "Ingredient swapped with its neighbour, or already first", body = MessageResponse),
        (status = 400, description = "Unknown position", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Ingredient or neighbour not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn move_ingredient(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id, position)): Path<(Uuid, Uuid, String)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let direction = parse_direction(&position)?;
    let mut conn = get_conn!(pool);

    let outcome = conn.transaction::<_, ApiError, _>(|conn| {
        let ingredient = find_owned_ingredient(conn, user.id, id)?;
        let mut scope = IngredientScope::new(conn, ingredient.shopping_list_id);
        Ok(move_item(
            &mut scope,
            Positioned::new(ingredient.id, ingredient.sort_order),
            direction,
        )?)
    })?;

    if let MoveOutcome::Swapped { from, to, .. } = outcome {
        tracing::debug!(ingredient_id = %id, from, to, "Ingredient moved");
    }

    Ok(MessageResponse::new("ShoppingListIngredient updated"))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/shopping-lists/{id}/move/{position}",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Shopping list ID"),
        ("position" = String, Path, description = "\"up\" or \"down\"")
    ),
    responses(
        (status = 200, description = "List swapped with its neighbour, or already first", body = MessageResponse),
        (status = 400, description = "Unknown position", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "List or neighbour not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn move_shopping_list(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id, position)): Path<(Uuid, Uuid, String)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let direction = parse_direction(&position)?;
    let mut conn = get_conn!(pool);

    conn.transaction::<_, ApiError, _>(|conn| {
        let list = find_owned_list(conn, user.id, id)?;
        let mut scope = ShoppingListScope::new(conn, user.id);
        move_item(&mut scope, Positioned::new(list.id, list.sort_order), direction)?;
        Ok(())
    })?;

    Ok(MessageResponse::new("ShoppingList updated"))
}
