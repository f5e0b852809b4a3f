use crate::api::{ApiError, ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Chef, NewChef};
use crate::schema::{chefs, users};
use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use kondate_core::ChefDraft;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::ChefResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChefRequest {
    pub name: Option<String>,
    /// USER or CHEF
    pub role: Option<String>,
    /// Required when role is USER
    pub user_id: Option<Uuid>,
    pub profile: Option<String>,
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/chefs",
    tag = "chefs",
    request_body(content = CreateChefRequest, example = json!({"name": "Alice Chef", "role": "CHEF"})),
    responses(
        (status = 201, description = "Chef created", body = ChefResponse),
        (status = 400, description = "Missing name, role or userId", body = ErrorResponse),
        (status = 404, description = "userId does not name a user", body = ErrorResponse)
    )
)]
pub async fn create_chef(
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateChefRequest>,
) -> ApiResult<(StatusCode, Json<ChefResponse>)> {
    let draft = ChefDraft::new(
        request.name.as_deref(),
        request.role.as_deref(),
        request.user_id,
        request.profile,
        request.image_url,
    )?;

    let mut conn = get_conn!(pool);

    if let Some(user_id) = draft.kind.user_id() {
        let exists: bool = diesel::select(diesel::dsl::exists(users::table.find(user_id)))
            .get_result(&mut conn)?;
        if !exists {
            return Err(ApiError::not_found("User not found"));
        }
    }

    let new_chef = NewChef {
        role: draft.kind.role().as_str(),
        user_id: draft.kind.user_id(),
        name: &draft.name,
        profile: draft.profile.as_deref(),
        image_url: draft.image_url.as_deref(),
    };

    let chef: Chef = diesel::insert_into(chefs::table)
        .values(&new_chef)
        .returning(Chef::as_returning())
        .get_result(&mut conn)?;

    tracing::info!(chef_id = %chef.id, role = %draft.kind.role(), "Chef created");

    Ok((StatusCode::CREATED, Json(ChefResponse::try_from(chef)?)))
}
