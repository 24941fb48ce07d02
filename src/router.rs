//! Axum route configuration and API documentation.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth::login,
        client::{create_client, delete_client, get_client, list_clients, update_client},
    },
    middleware::auth::require_bearer,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::auth::login,
        crate::controller::client::create_client,
        crate::controller::client::list_clients,
        crate::controller::client::get_client,
        crate::controller::client::update_client,
        crate::controller::client::delete_client,
    ),
    modifiers(&BearerTokenAddon)
)]
struct ApiDoc;

/// Registers the bearer security scheme referenced by the client endpoints.
struct BearerTokenAddon;

impl Modify for BearerTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router(state: AppState) -> Router {
    // Every /clients route sits behind the bearer guard; login stays open.
    let protected = Router::new()
        .route("/clients", post(create_client).get(list_clients))
        .route(
            "/clients/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/auth/login", post(login))
        .merge(protected)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
