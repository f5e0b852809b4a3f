pub mod create;
pub mod get;
pub mod list;
pub mod topic;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/recipes endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/topic", get(topic::topic_recipes))
        .route("/{id}", get(get::get_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        topic::topic_recipes,
        get::get_recipe,
    ),
    components(schemas(
        list::RecipeResponse,
        list::RecipeSummary,
        get::RecipeDetailResponse,
        get::RecipeImageResponse,
        get::RecipeStepResponse,
        get::RecipeIngredientResponse,
        get::RecipeLinkResponse,
        create::CreateRecipeRequest,
        create::CreateRecipeStep,
        topic::TopicRecipeResponse,
        kondate_core::RecipeStatus,
    ))
)]
pub struct ApiDoc;
