//! 健康检查处理器
//! 提供 /health 端点

use axum::Json;
use serde::Serialize;

/// 存活探针响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// 存活探针
/// 快速响应，不检查依赖
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
