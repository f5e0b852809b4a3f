use crate::api::chefs::get::{find_chef, ChefResponse};
use crate::api::recipes::list::{with_like_counts, RecipeSummary};
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Chef, NewFollow, Recipe};
use crate::schema::{chefs, follows, recipes};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/following-chefs",
    tag = "follows",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Chefs the user follows, most recent first", body = Vec<ChefResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_following_chefs(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<ChefResponse>>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let rows: Vec<Chef> = follows::table
        .inner_join(chefs::table)
        .filter(follows::user_id.eq(user.id))
        .order(follows::created_at.desc())
        .select(Chef::as_select())
        .load(&mut conn)?;

    let chefs = rows
        .into_iter()
        .map(ChefResponse::try_from)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(chefs))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/following-chefs/recipes",
    tag = "follows",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Recipes of followed chefs, newest first", body = Vec<RecipeSummary>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_following_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<RecipeSummary>>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let followed = follows::table
        .filter(follows::user_id.eq(user.id))
        .select(follows::chef_id);

    let rows: Vec<Recipe> = recipes::table
        .filter(recipes::chef_id.eq_any(followed))
        .order((recipes::created_at.desc(), recipes::id.asc()))
        .select(Recipe::as_select())
        .load(&mut conn)?;

    Ok(Json(with_like_counts(&mut conn, rows)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/following-chefs/{chef_id}",
    tag = "follows",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("chef_id" = Uuid, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Chef followed (also when already followed)", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User or chef not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn follow_chef(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, chef_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    find_chef(&mut conn, chef_id)?;

    let inserted = diesel::insert_into(follows::table)
        .values(&NewFollow {
            user_id: user.id,
            chef_id,
        })
        .on_conflict((follows::user_id, follows::chef_id))
        .do_nothing()
        .execute(&mut conn)?;

    if inserted > 0 {
        tracing::info!(user_id = %user.id, chef_id = %chef_id, "Chef followed");
    }

    Ok(MessageResponse::new("Followed chef"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/following-chefs/{chef_id}",
    tag = "follows",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("chef_id" = Uuid, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Chef unfollowed", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not following this chef", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn unfollow_chef(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, chef_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let deleted = diesel::delete(
        follows::table
            .filter(follows::user_id.eq(user.id))
            .filter(follows::chef_id.eq(chef_id)),
    )
    .execute(&mut conn)?;

    if deleted == 0 {
        return Err(ApiError::not_found("Follow not found"));
    }

    Ok(MessageResponse::new("Unfollowed chef"))
}
