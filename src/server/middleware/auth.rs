//! Bearer token authentication middleware.
//!
//! Every request gets a `Caller` extension. No route is guarded: a missing or
//! unusable token leaves the caller anonymous instead of rejecting the request.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::server::{
    model::auth::{AuthUser, Caller},
    state::AppState,
};

/// Resolves the caller from the `Authorization: Bearer <token>` header.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let caller = match bearer_token(&req) {
        Some(token) => resolve_caller(&state, token),
        None => Caller::Anonymous,
    };

    req.extensions_mut().insert(caller);

    next.run(req).await
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn resolve_caller(state: &AppState, token: &str) -> Caller {
    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("Ignoring bearer token: {}", err);
            return Caller::Anonymous;
        }
    };

    match AuthUser::from_claims(claims) {
        Some(user) => {
            tracing::debug!(
                "Request from user {} ({}) with role {}",
                user.username,
                user.user_id,
                user.role
            );
            Caller::User(user)
        }
        None => {
            tracing::debug!("Ignoring bearer token with non-numeric subject");
            Caller::Anonymous
        }
    }
}
