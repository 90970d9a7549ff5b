//! HTTP 中间件
//! 请求关联 ID 传播、请求日志与指标

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// 应用状态
///
/// AppState 内部使用 Arc 包装服务,这样:
/// 1. 多个请求可以共享服务实例
/// 2. Clone 成本低廉(Arc 是指针拷贝)
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::AppConfig,
    pub auth_service: Arc<crate::services::AuthService>,
    pub audit_service: Arc<crate::services::AuditService>,
}

/// 每个请求的关联 ID
///
/// 由中间件写入请求扩展，handler 通过 Extension 提取。
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 请求关联中间件
///
/// 优先沿用调用方的 x-request-id 头，缺失时生成 UUID。
/// 作为最外层 layer 包裹所有路由，每个请求恰好执行一次，
/// 无论 handler 成败都会把同一 ID 写回响应头。
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = extract_or_generate_request_id(req.headers());

    // 写入请求扩展，供下游 handler 使用
    req.extensions_mut()
        .insert(RequestId(request_id.clone()));

    // 获取请求方法和路径
    let method = req.method().to_string();
    let uri = req.uri().to_string();

    // 创建 span
    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    async move {
        let start = Instant::now();

        // 继续处理请求
        let response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();

        // 记录指标
        metrics::counter!(
            "http_requests_total",
            "method" => method.clone(),
            "status" => status.to_string()
        )
        .increment(1);
        metrics::histogram!("http_request_duration_seconds").record(elapsed.as_secs_f64());

        // 记录日志
        tracing::info!(
            method = %method,
            uri = %uri,
            status = status,
            elapsed_ms = elapsed.as_millis(),
            "Request completed"
        );

        // 在响应头中回写关联 ID
        // 入站值已通过 header 解析，出站值为 UUID，parse 不会失败
        let mut response = response;
        response
            .headers_mut()
            .insert("x-request-id", request_id.parse().unwrap());

        response
    }
    .instrument(span)
    .await
}

/// 从请求头中提取或生成关联 ID
///
/// HeaderMap 的键查找不区分大小写；空值视为缺失。
fn extract_or_generate_request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
