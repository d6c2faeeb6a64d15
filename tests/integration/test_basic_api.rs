//! Basic API integration tests

use axum::http::StatusCode;
use axum_test::TestServer;
use promocode_factory_api::config::ApiConfig;
use promocode_factory_api::routes;
use serde_json::Value;

fn create_test_server() -> TestServer {
    let app_state = routes::create_app_state();
    TestServer::new(routes::create_app(app_state, &[])).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    for path in ["/health", "/api/v1/health"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "promocode-factory-api");
    }
}

#[tokio::test]
async fn test_openapi_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/employees"));
    assert!(paths.contains_key("/employees/{id}"));
    assert!(paths.contains_key("/employees/deleteEmp/{id}"));
    assert!(paths.contains_key("/employees/update/{id}"));
    assert!(paths.contains_key("/roles"));
    assert_eq!(body["info"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = create_test_server();

    let response = server.get("/api/v1/partners").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_init_seeds_fake_data() {
    let config = ApiConfig::default();
    let app_state = routes::create_app_state_with_storage(&config)
        .await
        .unwrap();
    assert!(!app_state.is_postgres());

    let server = TestServer::new(routes::create_app(app_state, &[])).unwrap();

    let employees: Value = server.get("/api/v1/employees").await.json();
    assert_eq!(employees.as_array().unwrap().len(), 2);

    let roles: Value = server.get("/api/v1/roles").await.json();
    assert_eq!(roles.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_storage_init_without_seeding() {
    let config = ApiConfig {
        seed_fake_data: false,
        ..ApiConfig::default()
    };
    let app_state = routes::create_app_state_with_storage(&config)
        .await
        .unwrap();

    let server = TestServer::new(routes::create_app(app_state, &[])).unwrap();

    let employees: Value = server.get("/api/v1/employees").await.json();
    assert!(employees.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_restricted_cors_still_serves_requests() {
    let app_state = routes::create_app_state();
    let origins = vec!["http://localhost:3000".to_string()];
    let server = TestServer::new(routes::create_app(app_state, &origins)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}
