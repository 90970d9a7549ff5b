//! 审计相关模型

use serde::Serialize;

/// 审计事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditEvent {
    #[serde(rename = "auth.login.success")]
    LoginSuccess,
    #[serde(rename = "auth.login.fail")]
    LoginFail,
}

impl AuditEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEvent::LoginSuccess => "auth.login.success",
            AuditEvent::LoginFail => "auth.login.fail",
        }
    }
}

/// 审计记录
///
/// 只包含事件、用户名和请求 ID 三个固定字段，
/// 明文密码和存储哈希永远不进入审计记录。
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub event: AuditEvent,
    pub user: String,
    pub request_id: String,
}
