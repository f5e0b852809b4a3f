use crate::db::DbPool;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::db::get_user_from_token;
use super::extractor::{bearer_token, AuthError, AuthUser};

/// Middleware that requires a valid auth token for all requests.
/// The resolved user is stored in the request extensions for [`AuthUser`].
pub async fn require_auth(
    State(pool): State<Arc<DbPool>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_owned(),
        Err(e) => return e.into_response(),
    };

    let Some(user) = get_user_from_token(&pool, &token).await else {
        return AuthError::InvalidToken.into_response();
    };

    request.extensions_mut().insert(AuthUser(user));
    next.run(request).await
}
