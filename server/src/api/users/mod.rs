pub mod following;
pub mod likes;
pub mod list;

use crate::api::{shopping_list, shopping_memo};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/users endpoints, including the shopping
/// list and memo routes nested under a user.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_users))
        .route(
            "/{user_id}/following-chefs",
            get(following::list_following_chefs),
        )
        .route(
            "/{user_id}/following-chefs/recipes",
            get(following::list_following_recipes),
        )
        .route(
            "/{user_id}/following-chefs/{chef_id}",
            post(following::follow_chef).delete(following::unfollow_chef),
        )
        .route("/{user_id}/like-recipes", get(likes::list_liked_recipes))
        .route(
            "/{user_id}/like-recipes/{recipe_id}",
            post(likes::like_recipe).delete(likes::unlike_recipe),
        )
        .merge(shopping_list::router())
        .merge(shopping_memo::router())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_users,
        following::list_following_chefs,
        following::list_following_recipes,
        following::follow_chef,
        following::unfollow_chef,
        likes::list_liked_recipes,
        likes::like_recipe,
        likes::unlike_recipe,
    ),
    components(schemas(list::UserResponse))
)]
pub struct ApiDoc;
