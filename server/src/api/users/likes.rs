use crate::api::recipes::list::{with_like_counts, RecipeSummary};
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewLike, Recipe};
use crate::schema::{likes, recipes};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/like-recipes",
    tag = "likes",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Recipes the user liked, most recent like first", body = Vec<RecipeSummary>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_liked_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<RecipeSummary>>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let rows: Vec<Recipe> = likes::table
        .inner_join(recipes::table)
        .filter(likes::user_id.eq(user.id))
        .order(likes::created_at.desc())
        .select(Recipe::as_select())
        .load(&mut conn)?;

    Ok(Json(with_like_counts(&mut conn, rows)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/like-recipes/{recipe_id}",
    tag = "likes",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe liked (also when already liked)", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User or recipe not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn like_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let exists: bool = diesel::select(diesel::dsl::exists(
        recipes::table.filter(recipes::id.eq(recipe_id)),
    ))
    .get_result(&mut conn)?;
    if !exists {
        return Err(ApiError::not_found("Recipe not found"));
    }

    diesel::insert_into(likes::table)
        .values(&NewLike {
            user_id: user.id,
            recipe_id,
        })
        .on_conflict((likes::user_id, likes::recipe_id))
        .do_nothing()
        .execute(&mut conn)?;

    Ok(MessageResponse::new("Liked recipe"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/like-recipes/{recipe_id}",
    tag = "likes",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Like removed", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not liked", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn unlike_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let deleted = diesel::delete(
        likes::table
            .filter(likes::user_id.eq(user.id))
            .filter(likes::recipe_id.eq(recipe_id)),
    )
    .execute(&mut conn)?;

    if deleted == 0 {
        return Err(ApiError::not_found("Like not found"));
    }

    Ok(MessageResponse::new("Unliked recipe"))
}
