pub mod compare;
pub mod user;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors};

/// 构建全部 API 路由，挂载在 `/api` 下
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/insert", post(user::insert_user))
        .route("/compare/{id}", get(compare::compare_user));

    Router::new()
        .nest("/api", api_routes)
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
