use crate::api::ApiResult;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::{likes, recipes};
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

use super::list::RecipeResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecipeResponse {
    #[serde(flatten)]
    pub recipe: RecipeResponse,
    /// Likes created in the last three days
    pub recent_like_count: i64,
    pub total_like_count: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/topic",
    tag = "recipes",
    responses(
        (status = 200, description = "Up to 10 recipes with the most likes in the last three days", body = Vec<TopicRecipeResponse>)
    )
)]
pub async fn topic_recipes(
    State(pool): State<Arc<DbPool>>,
) -> ApiResult<Json<Vec<TopicRecipeResponse>>> {
    let mut conn = get_conn!(pool);
    let since = window_start(Utc::now());

    let recent: Vec<(Uuid, i64)> = likes::table
        .filter(likes::created_at.ge(since))
        .group_by(likes::recipe_id)
        .select((likes::recipe_id, count(likes::id)))
        .load(&mut conn)?;

    if recent.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let candidate_ids: Vec<Uuid> = recent.iter().map(|(id, _)| *id).collect();
    let totals: Vec<(Uuid, i64)> = likes::table
        .filter(likes::recipe_id.eq_any(&candidate_ids))
        .group_by(likes::recipe_id)
        .select((likes::recipe_id, count(likes::id)))
        .load(&mut conn)?;

    let ranked = rank_by_recent_activity(recent, totals, RANKING_LIMIT);
    let ranked_ids: Vec<Uuid> = ranked.iter().map(|activity| activity.id).collect();

    let mut recipes_by_id: HashMap<Uuid, Recipe> = recipes::table
        .filter(recipes::id.eq_any(&ranked_ids))
        .select(Recipe::as_select())
        .load::<Recipe>(&mut conn)?
        .into_iter()
        .map(|recipe| (recipe.id, recipe))
        .collect();

    let mut response = Vec::with_capacity(ranked.len());
    for activity in ranked {
        let Some(recipe) = recipes_by_id.remove(&activity.id) else {
            continue;
        };
        response.push(TopicRecipeResponse {
            recipe: RecipeResponse::try_from(recipe)?,
            recent_like_count: activity.recent_count,
            total_like_count: activity.total_count,
        });
    }

    Ok(Json(response))
}
