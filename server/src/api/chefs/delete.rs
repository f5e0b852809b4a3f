use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::chefs;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v1/chefs/{id}",
    tag = "chefs",
    params(
        ("id" = Uuid, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Chef deleted with its links, recipes and follows", body = MessageResponse),
        (status = 404, description = "Chef not found", body = ErrorResponse)
    )
)]
pub async fn delete_chef(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let mut conn = get_conn!(pool);

    let deleted = diesel::delete(chefs::table.filter(chefs::id.eq(id))).execute(&mut conn)?;

    if deleted == 0 {
        return Err(ApiError::not_found("Chef not found"));
    }

    Ok(MessageResponse::new("Deleted chef"))
}
