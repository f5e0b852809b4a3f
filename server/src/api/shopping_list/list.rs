use crate::api::{ApiResult, ErrorResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{ShoppingList, ShoppingListIngredient};
use crate::schema::{shopping_list_ingredients, shopping_lists};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListIngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub note: Option<String>,
    pub is_bought: bool,
    pub sort_order: i32,
}

impl From<ShoppingListIngredient> for ShoppingListIngredientResponse {
    fn from(row: ShoppingListIngredient) -> Self {
        ShoppingListIngredientResponse {
            id: row.id,
            name: row.name,
            note: row.note,
            is_bought: row.is_bought,
            sort_order: row.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    pub id: Uuid,
    /// Recipe the list was started from
    pub recipe_id: Option<Uuid>,
    pub name: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub ingredients: Vec<ShoppingListIngredientResponse>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/shopping-list",
    tag = "shopping_list",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's lists in display order, each with its ingredients", body = Vec<ShoppingListResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_shopping_lists(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<ShoppingListResponse>>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let lists: Vec<ShoppingList> = shopping_lists::table
        .filter(shopping_lists::user_id.eq(user.id))
        .order((shopping_lists::sort_order.asc(), shopping_lists::created_at.asc()))
        .select(ShoppingList::as_select())
        .load(&mut conn)?;

    let list_ids: Vec<Uuid> = lists.iter().map(|list| list.id).collect();
    let rows: Vec<ShoppingListIngredient> = shopping_list_ingredients::table
        .filter(shopping_list_ingredients::shopping_list_id.eq_any(&list_ids))
        .order((
            shopping_list_ingredients::sort_order.asc(),
            shopping_list_ingredients::created_at.asc(),
        ))
        .select(ShoppingListIngredient::as_select())
        .load(&mut conn)?;

    let mut by_list: HashMap<Uuid, Vec<ShoppingListIngredientResponse>> = HashMap::new();
    for row in rows {
        by_list
            .entry(row.shopping_list_id)
            .or_default()
            .push(row.into());
    }

    let response = lists
        .into_iter()
        .map(|list| ShoppingListResponse {
            ingredients: by_list.remove(&list.id).unwrap_or_default(),
            id: list.id,
            recipe_id: list.recipe_id,
            name: list.name,
            sort_order: list.sort_order,
            created_at: list.created_at,
        })
        .collect();

    Ok(Json(response))
}
