use super::find_owned_list;
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::ShoppingListIngredient;
use crate::schema::shopping_list_ingredients;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::item_name;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Fields left out keep their current value. A blank `note` clears it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientRequest {
    pub shopping_list_ingredient_id: Uuid,
    pub name: Option<String>,
    pub note: Option<String>,
    pub is_bought: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/shopping-list/{id}",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    request_body = UpdateIngredientRequest,
    responses(
        (status = 200, description = "Ingredient updated", body = MessageResponse),
        (status = 400, description = "Name is empty or longer than 255 characters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "List or ingredient not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_ingredient(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateIngredientRequest>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;

    let name = request.name.as_deref().map(item_name).transpose()?;

    let mut conn = get_conn!(pool);
    let list = find_owned_list(&mut conn, user.id, id)?;

    let current: ShoppingListIngredient = shopping_list_ingredients::table
        .filter(shopping_list_ingredients::id.eq(request.shopping_list_ingredient_id))
        .filter(shopping_list_ingredients::shopping_list_id.eq(list.id))
        .select(ShoppingListIngredient::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("ShoppingListIngredient not found"))?;

    diesel::update(shopping_list_ingredients::table.find(current.id))
        .set((
            shopping_list_ingredients::name.eq(name.unwrap_or(current.name)),
            shopping_list_ingredients::note.eq(merged_note(request.note, current.note)),
            shopping_list_ingredients::is_bought.eq(request.is_bought.unwrap_or(current.is_bought)),
        ))
        .execute(&mut conn)?;

    Ok(MessageResponse::new("ShoppingList updated"))
}

fn merged_note(requested: Option<String>, current: Option<String>) -> Option<String> {
    match requested {
        Some(note) if note.trim().is_empty() => None,
        Some(note) => Some(note),
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_note_keeps_current() {
        assert_eq!(
            merged_note(None, Some("2 packs".to_string())),
            Some("2 packs".to_string())
        );
    }

    #[test]
    fn test_blank_note_clears_it() {
        assert_eq!(merged_note(Some(String::new()), Some("2 packs".to_string())), None);
        assert_eq!(merged_note(Some("  ".to_string()), Some("2 packs".to_string())), None);
    }

    #[test]
    fn test_new_note_replaces_current() {
        assert_eq!(
            merged_note(Some("low fat".to_string()), Some("2 packs".to_string())),
            Some("low fat".to_string())
        );
    }

    #[test]
    fn test_request_accepts_empty_note() {
        let request: UpdateIngredientRequest = serde_json::from_value(serde_json::json!({
            "shoppingListIngredientId": "6f1f0d4e-3c52-4b0e-9d8a-2a4f7a1c9e10",
            "note": ""
        }))
        .unwrap();
        assert_eq!(request.note.as_deref(), Some(""));
        assert!(request.name.is_none());
    }
}
