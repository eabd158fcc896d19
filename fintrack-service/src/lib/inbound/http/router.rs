use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_record::add_record;
use super::handlers::delete_record::delete_record;
use super::handlers::list_records::list_records;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_record::update_record;
use super::middleware::authenticate as auth_middleware;
use crate::domain::record::service::RecordService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresRecordRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub record_service: Arc<RecordService<PostgresRecordRepository, PostgresUserRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    record_service: Arc<RecordService<PostgresRecordRepository, PostgresUserRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        record_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/user/login", post(login))
        .route("/user/register", post(register))
        .route("/user/all", get(list_users))
        .route("/visualization/:kind", get(list_records));

    let protected_routes = Router::new()
        .route("/add/:kind", post(add_record))
        .route("/update/:kind", put(update_record))
        .route("/delete/:kind", delete(delete_record))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Span deliberately omits headers: the Authorization header carries the
    // bearer token and must stay out of logs
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

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
