//! API routes module

pub mod health;
pub mod products;

use axum::{response::Redirect, routing::get, Router};
use axum_helpers::server::health_router;

use crate::{openapi::ApiDoc, state::AppState};

pub use health::ready_router;

/// Product routes plus the landing redirect
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(products::router(state))
}

/// Full application router.
///
/// `/health` (liveness with app name/version) and `/ready` (database round
/// trip) are merged before the shared layers, so they get the same tracing,
/// security headers and compression as the product routes.
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = routes(state)
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()));

    axum_helpers::create_router::<ApiDoc>(api_routes)
}

/// Send browsers hitting the root to the product list
async fn index() -> Redirect {
    Redirect::to("/produtos")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::common::RetryConfig;
    use database::postgres::PostgresConfig;
    use domain_products::entity;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgres://localhost/produtos"),
                retry: RetryConfig::default(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db,
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, headers, json)
    }

    #[tokio::test]
    async fn test_root_redirects_to_product_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let (status, headers, _) = get(routes(&state(db)), "/").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/produtos");
    }

    #[tokio::test]
    async fn test_product_list_reads_from_postgres() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entity::Model {
                id: 1,
                name: "Notebook".to_string(),
                description: "16GB".to_string(),
                price: "3299.99".parse().unwrap(),
                quantity: 10,
                category: "Eletrônicos".to_string(),
            }]])
            .into_connection();

        let (status, _, body) = get(routes(&state(db)), "/produtos").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["price"].to_string(), "3299.99");
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let row: BTreeMap<&str, sea_orm::Value> = BTreeMap::from([("?column?", 1i32.into())]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let (status, _, body) = get(ready_router(state(db)), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let (status, _, body) = get(ready_router(state(db)), "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }

    fn full_app(db: DatabaseConnection) -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || app(&state(db)).unwrap())
    }

    #[tokio::test]
    async fn test_health_carries_security_headers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, headers, body) = get(full_app(db), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_ready_carries_security_headers() {
        let row: BTreeMap<&str, sea_orm::Value> = BTreeMap::from([("?column?", 1i32.into())]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let (status, headers, body) = get(full_app(db), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::REFERRER_POLICY], "strict-origin-when-cross-origin");
    }
}
