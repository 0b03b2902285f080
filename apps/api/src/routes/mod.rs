pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{analysis, catalog, compare, dashboard, progress, recommendation, students};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/v1/projects",
            get(catalog::handlers::handle_list_projects)
                .post(catalog::handlers::handle_create_project),
        )
        .route(
            "/api/v1/projects/:id",
            get(catalog::handlers::handle_get_project)
                .delete(catalog::handlers::handle_delete_project),
        )
        // Students
        .route(
            "/api/v1/students",
            post(students::handlers::handle_register_student),
        )
        .route(
            "/api/v1/students/:key",
            get(students::handlers::handle_get_student),
        )
        .route(
            "/api/v1/students/:key/skills",
            put(students::handlers::handle_update_skills),
        )
        // Recommendations
        .route(
            "/api/v1/recommend",
            post(recommendation::handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendations",
            get(recommendation::handlers::handle_get_recommendations),
        )
        // Repository analysis
        .route("/api/v1/analyze", post(analysis::handlers::handle_analyze))
        // Progress
        .route("/api/v1/progress", get(progress::handlers::handle_get_progress))
        .route(
            "/api/v1/progress/start",
            post(progress::handlers::handle_start_project),
        )
        .route(
            "/api/v1/progress/toggle",
            post(progress::handlers::handle_toggle_step),
        )
        // Peers
        .route("/api/v1/compare", post(compare::handlers::handle_compare))
        .route("/api/v1/dashboard", get(dashboard::handlers::handle_dashboard))
        .with_state(state)
}
