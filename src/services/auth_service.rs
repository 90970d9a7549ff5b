//! 认证服务：登录校验与审计

use crate::{
    auth::password::PasswordVerifier,
    config::AppConfig,
    error::AppError,
    models::{audit::AuditEvent, auth::*},
    secrets::SecretProvider,
    services::audit_service::AuditService,
};
use secrecy::ExposeSecret;
use std::sync::Arc;

pub struct AuthService {
    secrets: Arc<dyn SecretProvider>,
    audit_service: Arc<AuditService>,
    verifier: PasswordVerifier,
    /// 存放期望密码哈希的环境变量名
    password_hash_env: String,
}

impl AuthService {
    pub fn new(
        secrets: Arc<dyn SecretProvider>,
        audit_service: Arc<AuditService>,
        config: &AppConfig,
    ) -> Self {
        Self {
            secrets,
            audit_service,
            verifier: PasswordVerifier::new(),
            password_hash_env: config.auth.password_hash_env.clone(),
        }
    }

    /// 用户登录
    ///
    /// 流程：现读期望哈希 -> bcrypt 校验 -> 审计 -> 返回结果。
    /// 哈希未配置属于运维故障，不产生审计记录；
    /// 校验一旦执行，无论成败恰好记录一条审计。
    pub fn login(&self, req: LoginRequest, request_id: &str) -> Result<LoginResponse, AppError> {
        // 每次登录时从环境现读，避免进程内缓存过期密钥
        let stored_hash = self.secrets.get(&self.password_hash_env).ok_or_else(|| {
            tracing::error!(
                env_var = %self.password_hash_env,
                "Expected password hash is not configured"
            );
            AppError::config("expected password hash is not configured")
        })?;

        let matched = self
            .verifier
            .verify(req.password.expose_secret(), &stored_hash);

        if matched {
            self.audit_service
                .record(AuditEvent::LoginSuccess, &req.username, request_id);

            return Ok(LoginResponse {
                status: "ok".to_string(),
                request_id: request_id.to_string(),
            });
        }

        self.audit_service
            .record(AuditEvent::LoginFail, &req.username, request_id);

        Err(AppError::Unauthorized)
    }
}
