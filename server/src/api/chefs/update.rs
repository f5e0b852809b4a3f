use crate::api::{ApiError, ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Chef;
use crate::schema::chefs;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::chef::required_name;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::ChefResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChefRequest {
    pub name: Option<String>,
    pub profile: Option<String>,
    pub image_url: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v1/chefs/{id}",
    tag = "chefs",
    params(
        ("id" = Uuid, Path, description = "Chef ID")
    ),
    request_body = UpdateChefRequest,
    responses(
        (status = 200, description = "Chef updated", body = ChefResponse),
        (status = 400, description = "Name is required", body = ErrorResponse),
        (status = 404, description = "Chef not found", body = ErrorResponse)
    )
)]
pub async fn update_chef(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateChefRequest>,
) -> ApiResult<Json<ChefResponse>> {
    let name = required_name(request.name.as_deref())?;

    let mut conn = get_conn!(pool);

    // profile and imageUrl are replaced, so omitting them clears them
    let chef: Chef = diesel::update(chefs::table.filter(chefs::id.eq(id)))
        .set((
            chefs::name.eq(&name),
            chefs::profile.eq(request.profile.as_deref()),
            chefs::image_url.eq(request.image_url.as_deref()),
        ))
        .returning(Chef::as_returning())
        .get_result(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Chef not found"))?;

    Ok(Json(ChefResponse::try_from(chef)?))
}
