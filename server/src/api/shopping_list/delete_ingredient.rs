use super::{find_owned_ingredient, find_owned_list};
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
use kondate_core::{close_gap, removal_cascade, Removal};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/shopping-list-ingredients/{id}",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Shopping list ingredient ID")
    ),
    responses(
        (status = 200, description = "Ingredient deleted; the list goes too when it was the last one", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_ingredient(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let removal = conn.transaction::<_, ApiError, _>(|conn| {
        let ingredient = find_owned_ingredient(conn, user.id, id)?;
        let count_before = IngredientScope::new(conn, ingredient.shopping_list_id).count()?;
        let removal = removal_cascade(count_before);

        diesel::delete(shopping_list_ingredients::table.find(ingredient.id)).execute(conn)?;

        match removal {
            Removal::Ingredient => {
                close_gap(
                    &mut IngredientScope::new(conn, ingredient.shopping_list_id),
                    ingredient.sort_order,
                )?;
            }
            Removal::IngredientAndList => {
                let list = find_owned_list(conn, user.id, ingredient.shopping_list_id)?;
                diesel::delete(shopping_lists::table.find(list.id)).execute(conn)?;
                close_gap(&mut ShoppingListScope::new(conn, user.id), list.sort_order)?;
            }
        }
        Ok(removal)
    })?;

    if removal == Removal::IngredientAndList {
        tracing::info!(user_id = %user.id, "Last ingredient removed, shopping list deleted");
    }

    Ok(MessageResponse::new("ShoppingList deleted"))
}
