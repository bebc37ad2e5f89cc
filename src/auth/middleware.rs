//! Authentication middleware for Axum

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::CredentialVerifier;

/// Authentication state carrying the injected verifier
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Bearer-token middleware - the request is rejected before the handler
/// body runs unless the presented token is exactly the issued one.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response("Missing authentication token");
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response("Invalid authentication");
    };

    if auth_state.verifier.verify_token(token) {
        next.run(request).await
    } else {
        auth_error_response("Invalid authentication")
    }
}

/// Create an authentication error response
fn auth_error_response(message: &str) -> Response {
    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (StatusCode::UNAUTHORIZED, body).into_response()
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::FixedCredentials;

    fn app() -> Router {
        let state = AuthState {
            verifier: Arc::new(FixedCredentials::new("a@b.c", "pw", "tok")),
        };
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(state, auth_middleware))
    }

    fn request(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/protected");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let resp = app().oneshot(request(None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_header_is_unauthorized() {
        let resp = app().oneshot(request(Some("Basic dXNlcg=="))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_token_is_unauthorized() {
        let resp = app().oneshot(request(Some("Bearer nope"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn issued_token_passes() {
        let resp = app().oneshot(request(Some("Bearer tok"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
