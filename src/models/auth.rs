//! 认证相关模型

use secrecy::Secret;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 登录请求
///
/// 密码使用 Secret 包装：Debug 输出被遮蔽，且没有 Serialize 实现，
/// 读取明文必须显式调用 expose_secret。
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    pub password: Secret<String>,
}

/// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
    pub request_id: String,
}
