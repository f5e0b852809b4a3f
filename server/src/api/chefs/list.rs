use crate::api::{ApiError, ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Chef;
use crate::schema::{chefs, recipes};
use axum::{
    extract::{Query, State},
    Json,
};
use diesel::dsl::count;
use diesel::prelude::*;
use kondate_core::ChefRole;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::get::ChefResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListChefsParams {
    /// Only chefs with this role (USER or CHEF)
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChefSummaryResponse {
    #[serde(flatten)]
    pub chef: ChefResponse,
    pub recipe_count: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs",
    tag = "chefs",
    params(ListChefsParams),
    responses(
        (status = 200, description = "Chefs ordered by name", body = Vec<ChefSummaryResponse>),
        (status = 400, description = "Unknown role", body = ErrorResponse),
        (status = 404, description = "Chefs not found", body = ErrorResponse)
    )
)]
pub async fn list_chefs(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListChefsParams>,
) -> ApiResult<Json<Vec<ChefSummaryResponse>>> {
    let role = params
        .role
        .as_deref()
        .filter(|role| !role.is_empty())
        .map(str::parse::<ChefRole>)
        .transpose()?;

    let mut conn = get_conn!(pool);

    let mut query = chefs::table
        .select(Chef::as_select())
        .order((chefs::name.asc(), chefs::id.asc()))
        .into_boxed();
    if let Some(role) = role {
        query = query.filter(chefs::role.eq(role.as_str()));
    }
    let chefs: Vec<Chef> = query.load(&mut conn)?;

    if chefs.is_empty() {
        return Err(ApiError::not_found("Chefs not found"));
    }

    let ids: Vec<Uuid> = chefs.iter().map(|chef| chef.id).collect();
    let recipe_counts: HashMap<Uuid, i64> = recipes::table
        .filter(recipes::chef_id.eq_any(&ids))
        .group_by(recipes::chef_id)
        .select((recipes::chef_id, count(recipes::id)))
        .load::<(Uuid, i64)>(&mut conn)?
        .into_iter()
        .collect();

    let response = chefs
        .into_iter()
        .map(|chef| {
            let recipe_count = recipe_counts.get(&chef.id).copied().unwrap_or(0);
            Ok(ChefSummaryResponse {
                chef: ChefResponse::try_from(chef)?,
                recipe_count,
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(response))
}
