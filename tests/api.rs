//! Router-level tests against an in-memory SQLite database

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use sea_orm::DatabaseConnection;
use time_booking::{
    create_api_router, init_database, run_migrations, DatabaseConfig, SeaOrmRepositoryProvider,
};

/// Router plus a handle on the pool behind it
async fn app_with_db() -> (Router, DatabaseConnection) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = init_database(&config).await.unwrap();
    run_migrations(&db).await.unwrap();
    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    (create_api_router(repos, db.clone(), None), db)
}

async fn app() -> Router {
    app_with_db().await.0
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn create_department(app: &Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/departments",
        json!({"name": name, "description": format!("{} department", name)}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["department"]["id"].as_i64().unwrap()
}

async fn create_project(app: &Router, name: &str, department_id: i64) -> i64 {
    let (status, body) = post(
        app,
        "/api/projects",
        json!({"name": name, "customer_name": "ACME", "department_id": department_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["project"]["id"].as_i64().unwrap()
}

// ── Users ──────────────────────────────────────────────────────

#[tokio::test]
async fn concurrent_identical_users_yield_one_conflict() {
    let app = app().await;
    let payload = json!({
        "name": "Chris Miller",
        "email": "chris.miller@example.com",
        "role": "developer",
        "department": "engineering"
    });

    let (first, second) = tokio::join!(
        post(&app, "/api/users", payload.clone()),
        post(&app, "/api/users", payload.clone()),
    );
    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    let conflict = if first.0 == StatusCode::CONFLICT { first.1 } else { second.1 };
    assert_eq!(conflict, json!({"error": "Email already exists"}));

    let (_, body) = get(&app, "/api/users").await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn user_is_created_and_listed() {
    let app = app().await;

    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "name": "John Doe",
            "email": "john.doe@example.com",
            "role": "developer",
            "department": "engineering"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user = &body["user"];
    assert!(user["id"].as_i64().unwrap() > 0);
    assert_eq!(user["name"], "John Doe");
    assert_eq!(user["email"], "john.doe@example.com");
    assert_eq!(user["role"], "developer");
    assert_eq!(user["department"], "engineering");
    assert!(user["created_at"].is_string());

    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = app().await;
    let payload = json!({
        "name": "Jane Smith",
        "email": "jane@example.com",
        "role": "designer",
        "department": "design"
    });

    let (status, _) = post(&app, "/api/users", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/api/users", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Email already exists"}));

    let (_, body) = get(&app, "/api/users").await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn user_with_missing_fields_is_rejected() {
    let app = app().await;

    let (status, body) = post(&app, "/api/users", json!({"name": "Nobody", "email": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "All fields (name, email, role, department) are required"})
    );
}

// ── Departments ────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_department_name_is_a_conflict() {
    let app = app().await;
    let payload = json!({"name": "R&D", "description": "Research"});

    let (status, body) = post(&app, "/api/departments", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["department"]["name"], "R&D");
    assert_eq!(body["department"]["description"], "Research");

    let (status, body) = post(&app, "/api/departments", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Department name already exists"}));

    let (_, body) = get(&app, "/api/departments").await;
    assert_eq!(body["departments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn departments_are_listed_by_name() {
    let app = app().await;
    for name in ["Zeta", "Alpha", "Mid"] {
        create_department(&app, name).await;
    }

    let (status, body) = get(&app, "/api/departments").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["departments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[tokio::test]
async fn department_without_description_is_rejected() {
    let app = app().await;
    let (status, body) = post(&app, "/api/departments", json!({"name": "Ops"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Name and description are required"}));
}

// ── Projects ───────────────────────────────────────────────────

#[tokio::test]
async fn project_with_unknown_department_is_rejected() {
    let app = app().await;

    let (status, body) = post(
        &app,
        "/api/projects",
        json!({"name": "X", "customer_name": "Y", "department_id": 9999}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid department ID"}));

    let (_, body) = get(&app, "/api/projects").await;
    assert!(body["projects"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn project_without_department_is_a_validation_error() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/api/projects",
        json!({"name": "X", "customer_name": "Y", "department_id": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Name, customer name, and department ID are required"})
    );
}

#[tokio::test]
async fn created_project_carries_raw_columns_only() {
    let app = app().await;
    let department = create_department(&app, "IoT Solutions").await;

    let (status, body) = post(
        &app,
        "/api/projects",
        json!({
            "name": "BMW Connected Car Platform",
            "customer_name": "BMW AG",
            "description": "IoT platform for connected vehicles",
            "department_id": department
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let project = body["project"].as_object().unwrap();
    assert_eq!(project["department_id"], department);
    assert_eq!(project["description"], "IoT platform for connected vehicles");
    assert!(!project.contains_key("department_name"));
}

#[tokio::test]
async fn projects_filter_by_department_newest_first() {
    let app = app().await;
    let iot = create_department(&app, "IoT Solutions").await;
    let apps = create_department(&app, "App Development").await;
    create_project(&app, "First", iot).await;
    create_project(&app, "Other", apps).await;
    create_project(&app, "Second", iot).await;

    let (status, body) = get(&app, &format!("/api/projects?department_id={}", iot)).await;
    assert_eq!(status, StatusCode::OK);
    let projects = body["projects"].as_array().unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Second", "First"]);
    assert!(projects
        .iter()
        .all(|p| p["department_name"] == "IoT Solutions"));

    let (_, body) = get(&app, "/api/projects?department_id=").await;
    assert_eq!(body["projects"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_department_filter_is_rejected() {
    let app = app().await;
    let (status, body) = get(&app, "/api/projects?department_id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn repeated_lists_are_identical() {
    let app = app().await;
    let department = create_department(&app, "Data Analytics").await;
    create_project(&app, "Bosch Production Analytics", department).await;

    let (_, first) = get(&app, "/api/projects").await;
    let (_, second) = get(&app, "/api/projects").await;
    assert_eq!(first, second);
}

// ── Booking accounts ───────────────────────────────────────────

#[tokio::test]
async fn booking_accounts_are_annotated_with_project_and_department() {
    let app = app().await;
    let department = create_department(&app, "Industry 4.0").await;
    let project = create_project(&app, "SAP Digital Twin Platform", department).await;

    let (status, body) = post(
        &app,
        "/api/booking-accounts",
        json!({"name": "Scrum Meetings", "description": "Dailies", "project_id": project}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking_account"]["project_id"], project);
    assert!(body["booking_account"].get("project_name").is_none());

    let (status, body) = get(&app, "/api/booking-accounts").await;
    assert_eq!(status, StatusCode::OK);
    let accounts = body["booking_accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["name"], "Scrum Meetings");
    assert_eq!(accounts[0]["project_name"], "SAP Digital Twin Platform");
    assert_eq!(accounts[0]["customer_name"], "ACME");
    assert_eq!(accounts[0]["department_name"], "Industry 4.0");
}

#[tokio::test]
async fn booking_accounts_filter_by_project() {
    let app = app().await;
    let department = create_department(&app, "DevOps & Cloud").await;
    let first = create_project(&app, "Pipeline", department).await;
    let second = create_project(&app, "Migration", department).await;
    for (name, project) in [("A", first), ("B", second), ("C", first)] {
        let (status, _) = post(
            &app,
            "/api/booking-accounts",
            json!({"name": name, "project_id": project}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(&app, &format!("/api/booking-accounts?project_id={}", first)).await;
    let names: Vec<&str> = body["booking_accounts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[tokio::test]
async fn booking_account_with_unknown_project_is_rejected() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/api/booking-accounts",
        json!({"name": "Orphan", "project_id": 4242}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid project ID"}));
}

#[tokio::test]
async fn booking_account_without_project_is_rejected() {
    let app = app().await;
    let (status, body) = post(&app, "/api/booking-accounts", json!({"name": "Loose"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Name and project ID are required"}));
}

// ── Transport ──────────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_gets_error_envelope() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/departments")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header("x-request-id", "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-42");
}

#[tokio::test]
async fn health_reports_database_ok() {
    let app = app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;
    let (status, body) = get(&app, "/api-doc/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Time Booking API");

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/users",
        "/api/departments",
        "/api/projects",
        "/api/booking-accounts",
    ] {
        assert!(paths[path].get("get").is_some(), "{} GET", path);
        assert!(paths[path].get("post").is_some(), "{} POST", path);
    }
}

#[tokio::test]
async fn metrics_route_is_absent_without_recorder() {
    let app = app().await;
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── Storage failures ───────────────────────────────────────────

#[tokio::test]
async fn closed_store_yields_generic_list_errors() {
    let (app, db) = app_with_db().await;
    db.close().await.unwrap();

    for (uri, message) in [
        ("/api/users", "Failed to fetch users"),
        ("/api/departments", "Failed to fetch departments"),
        ("/api/projects", "Failed to fetch projects"),
        ("/api/booking-accounts", "Failed to fetch booking accounts"),
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({"error": message}), "{}", uri);
    }
}

#[tokio::test]
async fn closed_store_yields_generic_create_errors() {
    let (app, db) = app_with_db().await;
    db.close().await.unwrap();

    let (status, body) = post(
        &app,
        "/api/departments",
        json!({"name": "Research", "description": "Research department"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to create department"}));

    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "name": "Lisa Garcia",
            "email": "lisa@example.com",
            "role": "designer",
            "department": "design"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to create user"}));
}

#[tokio::test]
async fn health_degrades_when_store_is_closed() {
    let (app, db) = app_with_db().await;
    db.close().await.unwrap();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"]["status"], "error");
    assert!(body["database"]["latency_ms"].is_null());
}
