//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::{AppState, RequestId},
    models::auth::LoginRequest,
};
use axum::{extract::State, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// 登录
///
/// 关联 ID 由中间件提前写入请求扩展；
/// 请求体校验在进入服务层之前完成。
pub async fn login(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // 验证请求
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state.auth_service.login(req, request_id.as_str())?;

    Ok(Json(response))
}
