mod crypto;
mod db;
mod extractor;
mod google;
mod middleware;

pub use crypto::{generate_token, hash_token};
pub use db::{create_session, delete_session, get_user_from_token};
pub use extractor::{ensure_same_user, AuthError, AuthUser, BearerToken};
pub use google::{GoogleClient, GoogleError, GoogleProfile};
pub use middleware::require_auth;
