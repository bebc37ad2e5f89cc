//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::error::{ErrorBody, FieldError};
use crate::api::handlers::{auth, dashboard, exports, health, services, AppState};
use crate::auth::{auth_middleware, AuthState, CredentialVerifier};
use crate::infrastructure::Storage;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Static bearer token obtained from POST /api/auth/login",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        // Services
        services::list_services,
        services::create_service,
        services::get_service,
        services::update_service,
        services::delete_service,
        // Dashboard
        dashboard::get_dashboard_stats,
        // Exports
        exports::export_services_excel,
        exports::export_services_pdf,
    ),
    components(
        schemas(
            // Common
            MessageResponse,
            ErrorBody,
            FieldError,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Services
            ServiceDto,
            CreateServiceRequest,
            UpdateServiceRequest,
            DashboardStatsDto,
            ServiceTypeCountDto,
            // Health
            health::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness probe for uptime monitoring."),
        (name = "Authentication", description = "Single fixed credential pair. The returned token is passed in the `Authorization: Bearer <token>` header on every other route."),
        (name = "Services", description = "CRUD over tracked recurring services (domains, hosting, websites, consulting), dashboard aggregates and Excel/PDF exports. Deletes are soft: records disappear from reads but stay in storage."),
    ),
    info(
        title = "Gallax Hizmet Takip API",
        version = "1.0.0",
        description = "REST API for tracking recurring external services with renewal dates and annual fees.

## Authentication

Obtain the token via `POST /api/auth/login` and pass it as `Authorization: Bearer <token>`. The token is a single shared secret; there is no expiry or refresh.

## Errors

Failed requests return `{\"success\": false, \"error\": \"...\"}`; validation failures additionally carry a per-field `details` array.",
        contact(
            name = "Gallax Design",
            email = "bilgi@gallaxdesign.com"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    storage: Arc<dyn Storage>,
    verifier: Arc<dyn CredentialVerifier>,
) -> Router {
    let middleware_state = AuthState {
        verifier: verifier.clone(),
    };
    let app_state = AppState { storage };
    let auth_state = auth::AuthHandlerState { verifier };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(auth_state);

    // Service routes (protected). Static segments are registered alongside
    // the parametric one; the router prefers the static match, so
    // /stats/dashboard and /export/* never collide with /{id}.
    let service_routes = Router::new()
        .route(
            "/",
            get(services::list_services).post(services::create_service),
        )
        .route("/stats/dashboard", get(dashboard::get_dashboard_stats))
        .route("/export/excel", get(exports::export_services_excel))
        .route("/export/pdf", get(exports::export_services_pdf))
        .route(
            "/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(app_state);

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // API
        .nest("/api/auth", auth_routes)
        .nest("/api/services", service_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
