use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Link, NewLink};
use crate::schema::links;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use kondate_core::{ensure_site_type_available, DomainError, SiteType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::find_chef;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: Uuid,
    pub chef_id: Uuid,
    pub site_type: SiteType,
    pub account_name: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Link> for LinkResponse {
    type Error = ApiError;

    fn try_from(link: Link) -> Result<Self, Self::Error> {
        let site_type = link
            .site_type
            .parse::<SiteType>()
            .map_err(|e: DomainError| ApiError::Internal(format!("Link {}: {}", link.id, e)))?;

        Ok(LinkResponse {
            id: link.id,
            chef_id: link.chef_id,
            site_type,
            account_name: link.account_name,
            url: link.url,
            created_at: link.created_at,
            updated_at: link.updated_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    /// YOUTUBE, INSTAGRAM, TIKTOK, X, FACEBOOK, BLOG or OTHER
    pub site_type: Option<String>,
    pub account_name: Option<String>,
    pub url: Option<String>,
}

struct ValidLink {
    site_type: SiteType,
    account_name: Option<String>,
    url: String,
}

impl LinkRequest {
    fn validate(self) -> ApiResult<ValidLink> {
        let site_type = self
            .site_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("siteType and url are required"))?
            .parse::<SiteType>()?;

        let url = self
            .url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::bad_request("siteType and url are required"))?;

        Ok(ValidLink {
            site_type,
            account_name: self.account_name.filter(|name| !name.trim().is_empty()),
            url,
        })
    }
}

/// The (id, siteType) pairs a chef already uses.
fn existing_site_types(
    conn: &mut PgConnection,
    chef_id: Uuid,
) -> ApiResult<Vec<(Uuid, SiteType)>> {
    let rows: Vec<(Uuid, String)> = links::table
        .filter(links::chef_id.eq(chef_id))
        .select((links::id, links::site_type))
        .load(conn)?;

    // Rows with an unrecognised site type can't collide with a valid one.
    Ok(rows
        .into_iter()
        .filter_map(|(id, site)| site.parse().ok().map(|site| (id, site)))
        .collect())
}

fn find_link(conn: &mut PgConnection, chef_id: Uuid, link_id: Uuid) -> ApiResult<Link> {
    links::table
        .filter(links::id.eq(link_id))
        .filter(links::chef_id.eq(chef_id))
        .select(Link::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Link not found"))
}

/// A unique-index hit means another request took the site type first.
fn site_type_taken(site_type: SiteType) -> impl FnOnce(ApiError) -> ApiError {
    move |err| match err {
        ApiError::Conflict(_) => DomainError::conflict(format!(
            "A {site_type} link already exists for this chef"
        ))
        .into(),
        other => other,
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/{id}/links",
    tag = "links",
    params(
        ("id" = Uuid, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Links of the chef", body = Vec<LinkResponse>),
        (status = 404, description = "Chef or links not found", body = ErrorResponse)
    )
)]
pub async fn list_links(
    State(pool): State<Arc<DbPool>>,
    Path(chef_id): Path<Uuid>,
) -> ApiResult<Json<Vec<LinkResponse>>> {
    let mut conn = get_conn!(pool);

    find_chef(&mut conn, chef_id)?;

    let rows: Vec<Link> = links::table
        .filter(links::chef_id.eq(chef_id))
        .order(links::created_at.asc())
        .select(Link::as_select())
        .load(&mut conn)?;

    if rows.is_empty() {
        return Err(ApiError::not_found("Links not found"));
    }

    let links = rows
        .into_iter()
        .map(LinkResponse::try_from)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(links))
}

#[utoipa::path(
    post,
    path = "/api/v1/chefs/{id}/links",
    tag = "links",
    params(
        ("id" = Uuid, Path, description = "Chef ID")
    ),
    request_body(content = LinkRequest, example = json!({"siteType": "YOUTUBE", "url": "https://youtube.com/@alice"})),
    responses(
        (status = 201, description = "Link created", body = LinkResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Chef not found", body = ErrorResponse),
        (status = 409, description = "The chef already has a link for this site", body = ErrorResponse)
    )
)]
pub async fn create_link(
    State(pool): State<Arc<DbPool>>,
    Path(chef_id): Path<Uuid>,
    Json(request): Json<LinkRequest>,
) -> ApiResult<(StatusCode, Json<LinkResponse>)> {
    let link = request.validate()?;
    let mut conn = get_conn!(pool);

    let created: Link = conn
        .transaction::<_, ApiError, _>(|conn| {
            find_chef(conn, chef_id)?;
            ensure_site_type_available(existing_site_types(conn, chef_id)?, link.site_type, None)?;

            let new_link = NewLink {
                chef_id,
                site_type: link.site_type.as_str(),
                account_name: link.account_name.as_deref(),
                url: &link.url,
            };

            Ok(diesel::insert_into(links::table)
                .values(&new_link)
                .returning(Link::as_returning())
                .get_result(conn)?)
        })
        .map_err(site_type_taken(link.site_type))?;

    Ok((StatusCode::CREATED, Json(LinkResponse::try_from(created)?)))
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/{id}/links/{link_id}",
    tag = "links",
    params(
        ("id" = Uuid, Path, description = "Chef ID"),
        ("link_id" = Uuid, Path, description = "Link ID")
    ),
    responses(
        (status = 200, description = "The link", body = LinkResponse),
        (status = 404, description = "Link not found", body = ErrorResponse)
    )
)]
pub async fn get_link(
    State(pool): State<Arc<DbPool>>,
    Path((chef_id, link_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<LinkResponse>> {
    let mut conn = get_conn!(pool);
    let link = find_link(&mut conn, chef_id, link_id)?;
    Ok(Json(LinkResponse::try_from(link)?))
}

#[utoipa::path(
    put,
    path = "/api/v1/chefs/{id}/links/{link_id}",
    tag = "links",
    params(
        ("id" = Uuid, Path, description = "Chef ID"),
        ("link_id" = Uuid, Path, description = "Link ID")
    ),
    request_body = LinkRequest,
    responses(
        (status = 200, description = "Link updated", body = LinkResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse),
        (status = 409, description = "Another link of the chef uses this site", body = ErrorResponse)
    )
)]
pub async fn update_link(
    State(pool): State<Arc<DbPool>>,
    Path((chef_id, link_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<LinkRequest>,
) -> ApiResult<Json<LinkResponse>> {
    let link = request.validate()?;
    let mut conn = get_conn!(pool);

    let updated: Link = conn
        .transaction::<_, ApiError, _>(|conn| {
            find_link(conn, chef_id, link_id)?;
            ensure_site_type_available(
                existing_site_types(conn, chef_id)?,
                link.site_type,
                Some(&link_id),
            )?;

            Ok(diesel::update(links::table.filter(links::id.eq(link_id)))
                .set((
                    links::site_type.eq(link.site_type.as_str()),
                    links::account_name.eq(link.account_name.as_deref()),
                    links::url.eq(&link.url),
                ))
                .returning(Link::as_returning())
                .get_result(conn)?)
        })
        .map_err(site_type_taken(link.site_type))?;

    Ok(Json(LinkResponse::try_from(updated)?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/chefs/{id}/links/{link_id}",
    tag = "links",
    params(
        ("id" = Uuid, Path, description = "Chef ID"),
        ("link_id" = Uuid, Path, description = "Link ID")
    ),
    responses(
        (status = 200, description = "Link deleted", body = MessageResponse),
        (status = 404, description = "Link not found", body = ErrorResponse)
    )
)]
pub async fn delete_link(
    State(pool): State<Arc<DbPool>>,
    Path((chef_id, link_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    let mut conn = get_conn!(pool);

    let deleted = diesel::delete(
        links::table
            .filter(links::id.eq(link_id))
            .filter(links::chef_id.eq(chef_id)),
    )
    .execute(&mut conn)?;

    if deleted == 0 {
        return Err(ApiError::not_found("Link not found"));
    }

    Ok(MessageResponse::new("Deleted link"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(site_type: Option<&str>, url: Option<&str>) -> LinkRequest {
        LinkRequest {
            site_type: site_type.map(str::to_string),
            account_name: Some("  ".to_string()),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_link_request() {
        let link = request(Some("YOUTUBE"), Some(" https://youtube.com/@a ")).validate().unwrap();
        assert_eq!(link.site_type, SiteType::Youtube);
        assert_eq!(link.url, "https://youtube.com/@a");
        assert_eq!(link.account_name, None);
    }

    #[test]
    fn test_validate_link_request_rejects_missing_fields() {
        assert!(matches!(
            request(None, Some("https://x.com/a")).validate(),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            request(Some("X"), None).validate(),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            request(Some("MYSPACE"), Some("https://myspace.com")).validate(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_unique_index_conflict_is_reworded() {
        let err = site_type_taken(SiteType::Blog)(ApiError::Conflict("Resource already exists".into()));
        assert_eq!(err.to_string(), "A BLOG link already exists for this chef");

        let err = site_type_taken(SiteType::Blog)(ApiError::not_found("Chef not found"));
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
