use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::authorization::ClientAuthorizer;
use super::handlers::create_product::create_product;
use super::handlers::delete_product::delete_product;
use super::handlers::favorite_product::favorite_product;
use super::handlers::get_current_client::get_current_client;
use super::handlers::get_product::get_product;
use super::handlers::list_products::list_products;
use super::handlers::login::login;
use super::handlers::register_client::register_client;
use super::handlers::unfavorite_product::unfavorite_product;
use super::handlers::update_current_client::update_current_client;
use super::handlers::update_product::update_product;
use crate::domain::client::service::ClientService;
use crate::domain::product::service::ProductService;
use crate::outbound::repositories::PostgresClientRepository;
use crate::outbound::repositories::PostgresProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService<PostgresClientRepository>>,
    pub product_service: Arc<ProductService<PostgresProductRepository>>,
    pub authorizer: Arc<ClientAuthorizer<PostgresClientRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub token_ttl_minutes: i64,
}

pub fn create_router(
    client_service: Arc<ClientService<PostgresClientRepository>>,
    product_service: Arc<ProductService<PostgresProductRepository>>,
    authorizer: Arc<ClientAuthorizer<PostgresClientRepository>>,
    authenticator: Arc<Authenticator>,
    token_ttl_minutes: i64,
) -> Router {
    let state = AppState {
        client_service,
        product_service,
        authorizer,
        authenticator,
        token_ttl_minutes,
    };

    // Authorization is a per-handler gate rather than route-layer middleware:
    // product reads accept anonymous viewers while writes demand a principal.
    let routes = Router::new()
        .route("/api/clients", post(register_client))
        .route("/api/clients/login", post(login))
        .route("/api/client", get(get_current_client))
        .route("/api/client", put(update_current_client))
        .route("/api/products", get(list_products))
        .route("/api/products", post(create_product))
        .route("/api/products/:slug", get(get_product))
        .route("/api/products/:slug", put(update_product))
        .route("/api/products/:slug", delete(delete_product))
        .route("/api/products/:slug/favorite", post(favorite_product))
        .route("/api/products/:slug/favorite", delete(unfavorite_product));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
