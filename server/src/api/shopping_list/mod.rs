pub mod add_ingredient;
pub mod create;
pub mod delete;
pub mod delete_ingredient;
pub mod list;
pub mod reorder;
pub mod update;

use crate::api::{ApiError, ApiResult};
use crate::models::{ShoppingList, ShoppingListIngredient};
use crate::ordering::IngredientScope;
use crate::schema::{shopping_list_ingredients, shopping_lists};
use crate::AppState;
use axum::routing::{delete as delete_method, get, post, put};
use axum::Router;
use diesel::prelude::*;
use kondate_core::ExistingList;
use utoipa::OpenApi;
use uuid::Uuid;

/// Returns the shopping list routes, relative to /api/v1/users
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/shopping-list",
            get(list::list_shopping_lists).post(create::add_from_recipe),
        )
        .route(
            "/{user_id}/shopping-list/ingredient",
            post(add_ingredient::add_ingredient),
        )
        .route(
            "/{user_id}/shopping-list/{id}",
            put(update::update_ingredient).delete(delete::delete_shopping_list),
        )
        .route(
            "/{user_id}/shopping-list/{id}/completedIngredient",
            delete_method(delete::delete_completed_ingredients),
        )
        .route(
            "/{user_id}/shopping-list-ingredients/{id}",
            delete_method(delete_ingredient::delete_ingredient),
        )
        .route(
            "/{user_id}/shopping-list-ingredients/{id}/move/{position}",
            put(reorder::move_ingredient),
        )
        .route(
            "/{user_id}/shopping-lists/{id}/move/{position}",
            put(reorder::move_shopping_list),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_shopping_lists,
        create::add_from_recipe,
        add_ingredient::add_ingredient,
        update::update_ingredient,
        delete::delete_shopping_list,
        delete::delete_completed_ingredients,
        delete_ingredient::delete_ingredient,
        reorder::move_ingredient,
        reorder::move_shopping_list,
    ),
    components(schemas(
        list::ShoppingListResponse,
        list::ShoppingListIngredientResponse,
        create::AddFromRecipeRequest,
        add_ingredient::AddIngredientRequest,
        update::UpdateIngredientRequest,
    ))
)]
pub struct ApiDoc;

/// Loads one of the user's lists or fails with "ShoppingList not found".
fn find_owned_list(
    conn: &mut PgConnection,
    user_id: Uuid,
    list_id: Uuid,
) -> ApiResult<ShoppingList> {
    shopping_lists::table
        .filter(shopping_lists::id.eq(list_id))
        .filter(shopping_lists::user_id.eq(user_id))
        .select(ShoppingList::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("ShoppingList not found"))
}

/// Loads an ingredient whose list belongs to the user.
fn find_owned_ingredient(
    conn: &mut PgConnection,
    user_id: Uuid,
    ingredient_id: Uuid,
) -> ApiResult<ShoppingListIngredient> {
    shopping_list_ingredients::table
        .inner_join(shopping_lists::table)
        .filter(shopping_list_ingredients::id.eq(ingredient_id))
        .filter(shopping_lists::user_id.eq(user_id))
        .select(ShoppingListIngredient::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("ShoppingListIngredient not found"))
}

/// The list the user keeps for `recipe_id`, with its ingredient count.
fn list_for_recipe(
    conn: &mut PgConnection,
    user_id: Uuid,
    recipe_id: Uuid,
) -> QueryResult<Option<ExistingList<Uuid>>> {
    let list_id: Option<Uuid> = shopping_lists::table
        .filter(shopping_lists::user_id.eq(user_id))
        .filter(shopping_lists::recipe_id.eq(recipe_id))
        .select(shopping_lists::id)
        .first(conn)
        .optional()?;

    let Some(id) = list_id else {
        return Ok(None);
    };

    let ingredient_count = IngredientScope::new(conn, id).count()?;
    Ok(Some(ExistingList {
        id,
        ingredient_count,
    }))
}
