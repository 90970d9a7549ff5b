//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::AppState};

/// 创建应用路由
///
/// 关联中间件作为最外层 layer，包裹包括 /health 在内的所有路由。
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/user", get(handlers::user::get_user))
        .route("/login", post(handlers::auth::login))
        .layer(axum::middleware::from_fn(
            crate::middleware::request_id_middleware,
        ))
        .with_state(state)
}
