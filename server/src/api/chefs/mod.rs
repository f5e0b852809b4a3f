pub mod create;
pub mod delete;
pub mod get;
pub mod links;
pub mod list;
pub mod popular;
pub mod recipes;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/chefs endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_chefs).post(create::create_chef))
        .route("/popular", get(popular::popular_chefs))
        .route(
            "/{id}",
            get(get::get_chef)
                .put(update::update_chef)
                .delete(delete::delete_chef),
        )
        .route(
            "/{id}/links",
            get(links::list_links).post(links::create_link),
        )
        .route(
            "/{id}/links/{link_id}",
            get(links::get_link)
                .put(links::update_link)
                .delete(links::delete_link),
        )
        .route("/{id}/recipes", get(recipes::list_chef_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_chefs,
        create::create_chef,
        popular::popular_chefs,
        get::get_chef,
        update::update_chef,
        delete::delete_chef,
        links::list_links,
        links::create_link,
        links::get_link,
        links::update_link,
        links::delete_link,
        recipes::list_chef_recipes,
    ),
    components(schemas(
        get::ChefResponse,
        get::ChefDetailResponse,
        list::ChefSummaryResponse,
        create::CreateChefRequest,
        update::UpdateChefRequest,
        popular::PopularChefResponse,
        links::LinkResponse,
        links::LinkRequest,
        kondate_core::ChefRole,
        kondate_core::SiteType,
    ))
)]
pub struct ApiDoc;
