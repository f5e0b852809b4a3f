use crate::api::ApiResult;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Chef;
use crate::schema::{chefs, follows};
use axum::{extract::State, Json};
use chrono::Utc;
use diesel::dsl::count;
use diesel::prelude::*;
use kondate_core::{rank_by_recent_activity, window_start, RANKING_LIMIT};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::ChefResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopularChefResponse {
    #[serde(flatten)]
    pub chef: ChefResponse,
    /// Follows created in the last three days
    pub recent_follow_count: i64,
    pub total_follow_count: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/popular",
    tag = "chefs",
    responses(
        (status = 200, description = "Up to 10 chefs with the most follows in the last three days", body = Vec<PopularChefResponse>)
    )
)]
pub async fn popular_chefs(
    State(pool): State<Arc<DbPool>>,
) -> ApiResult<Json<Vec<PopularChefResponse>>> {
    let mut conn = get_conn!(pool);
    let since = window_start(Utc::now());

    let recent: Vec<(Uuid, i64)> = follows::table
        .filter(follows::created_at.ge(since))
        .group_by(follows::chef_id)
        .select((follows::chef_id, count(follows::id)))
        .load(&mut conn)?;

    if recent.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let candidate_ids: Vec<Uuid> = recent.iter().map(|(id, _)| *id).collect();
    let totals: Vec<(Uuid, i64)> = follows::table
        .filter(follows::chef_id.eq_any(&candidate_ids))
        .group_by(follows::chef_id)
        .select((follows::chef_id, count(follows::id)))
        .load(&mut conn)?;

    let ranked = rank_by_recent_activity(recent, totals, RANKING_LIMIT);
    let ranked_ids: Vec<Uuid> = ranked.iter().map(|activity| activity.id).collect();

    let mut chefs_by_id: HashMap<Uuid, Chef> = chefs::table
        .filter(chefs::id.eq_any(&ranked_ids))
        .select(Chef::as_select())
        .load::<Chef>(&mut conn)?
        .into_iter()
        .map(|chef| (chef.id, chef))
        .collect();

    let mut response = Vec::with_capacity(ranked.len());
    for activity in ranked {
        let Some(chef) = chefs_by_id.remove(&activity.id) else {
            continue;
        };
        response.push(PopularChefResponse {
            chef: ChefResponse::try_from(chef)?,
            recent_follow_count: activity.recent_count,
            total_follow_count: activity.total_count,
        });
    }

    Ok(Json(response))
}
