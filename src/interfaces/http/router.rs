//! API Router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ErrorResponse;
use crate::interfaces::http::modules::{
    booking_accounts, departments,
    health::{self, HealthState},
    metrics::{http_metrics_middleware, prometheus_metrics, MetricsState},
    projects,
    request_id::request_id_middleware,
    users, CatalogState,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::create_user,
        departments::list_departments,
        departments::create_department,
        projects::list_projects,
        projects::create_project,
        booking_accounts::list_booking_accounts,
        booking_accounts::create_booking_account,
    ),
    components(
        schemas(
            ErrorResponse,
            health::HealthResponse,
            health::ComponentHealth,
            // Users
            users::UserDto,
            users::CreateUserRequest,
            users::UsersResponse,
            users::UserResponse,
            // Departments
            departments::DepartmentDto,
            departments::CreateDepartmentRequest,
            departments::DepartmentsResponse,
            departments::DepartmentResponse,
            // Projects
            projects::ProjectDto,
            projects::ProjectListingDto,
            projects::CreateProjectRequest,
            projects::ProjectsResponse,
            projects::ProjectResponse,
            // Booking accounts
            booking_accounts::BookingAccountDto,
            booking_accounts::BookingAccountListingDto,
            booking_accounts::CreateBookingAccountRequest,
            booking_accounts::BookingAccountsResponse,
            booking_accounts::BookingAccountResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Users", description = "User management"),
        (name = "Departments", description = "Department management"),
        (name = "Projects", description = "Project management, optionally by department"),
        (name = "Booking Accounts", description = "Booking accounts that time is logged against"),
    ),
    info(
        title = "Time Booking API",
        version = "1.0",
        description = "API for managing time booking system with users, departments, projects, and booking accounts"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let catalog_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/booking-accounts",
            get(booking_accounts::list_booking_accounts)
                .post(booking_accounts::create_booking_account),
        )
        .with_state(CatalogState { repos });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState::new(db));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/api-doc").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .nest("/api", catalog_routes);

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(middleware::from_fn(http_metrics_middleware)),
    )
}
