use super::find_owned_list;
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::ordering::{IngredientScope, ShoppingListScope};
use crate::schema::{shopping_list_ingredients, shopping_lists};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::{clear_cascade, close_gap, compact, Removal};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/shopping-list/{id}",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    responses(
        (status = 200, description = "List and its ingredients deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_shopping_list(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    conn.transaction::<_, ApiError, _>(|conn| {
        let list = find_owned_list(conn, user.id, id)?;

        diesel::delete(
            shopping_list_ingredients::table
                .filter(shopping_list_ingredients::shopping_list_id.eq(list.id)),
        )
        .execute(conn)?;
        diesel::delete(shopping_lists::table.find(list.id)).execute(conn)?;

        close_gap(&mut ShoppingListScope::new(conn, user.id), list.sort_order)?;
        Ok(())
    })?;

    tracing::info!(user_id = %user.id, list_id = %id, "Shopping list deleted");

    Ok(MessageResponse::new("ShoppingList deleted"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/shopping-list/{id}/completedIngredient",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    responses(
        (status = 200, description = "Bought ingredients removed, the rest renumbered; a list left empty is deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_completed_ingredients(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let (deleted, removal) = conn.transaction::<_, ApiError, _>(|conn| {
        let list = find_owned_list(conn, user.id, id)?;

        let deleted = diesel::delete(
            shopping_list_ingredients::table
                .filter(shopping_list_ingredients::shopping_list_id.eq(list.id))
                .filter(shopping_list_ingredients::is_bought.eq(true)),
        )
        .execute(conn)?;

        let remaining = IngredientScope::new(conn, list.id).count()?;
        let removal = clear_cascade(remaining);
        match removal {
            Removal::Ingredient => {
                if deleted > 0 {
                    compact(&mut IngredientScope::new(conn, list.id))?;
                }
            }
            Removal::IngredientAndList => {
                diesel::delete(shopping_lists::table.find(list.id)).execute(conn)?;
                close_gap(&mut ShoppingListScope::new(conn, user.id), list.sort_order)?;
            }
        }
        Ok((deleted, removal))
    })?;

    tracing::debug!(list_id = %id, deleted, "Cleared bought ingredients");
    if removal == Removal::IngredientAndList {
        tracing::info!(
            user_id = %user.id,
            list_id = %id,
            "Every ingredient bought, shopping list deleted"
        );
    }

    Ok(MessageResponse::new("ShoppingList deleted"))
}
