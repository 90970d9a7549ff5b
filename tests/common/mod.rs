//! 测试公共模块
//! 提供测试辅助函数和测试工具

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use user_api::{
    config::{AppConfig, AuthConfig, LoggingConfig, ServerConfig},
    middleware::AppState,
    models::audit::AuditRecord,
    secrets::SecretProvider,
    services::{AuditService, AuditSink, AuthService},
};

/// 测试用 bcrypt 成本因子（默认值太慢）
pub const TEST_BCRYPT_COST: u32 = 4;

/// 创建测试配置
pub fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(), // 使用随机端口
            graceful_shutdown_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        auth: AuthConfig {
            password_hash_env: "ADMIN_PASSWORD_HASH".to_string(),
        },
    }
}

/// 内存密钥提供者
///
/// 测试中替代进程环境变量，避免测试间的全局状态耦合。
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    /// 没有任何密钥（模拟未配置的环境）
    pub fn empty() -> Self {
        Self {
            secrets: HashMap::new(),
        }
    }

    /// 配置了 ADMIN_PASSWORD_HASH 的环境
    pub fn with_admin_hash(hash: &str) -> Self {
        Self {
            secrets: HashMap::from([("ADMIN_PASSWORD_HASH".to_string(), hash.to_string())]),
        }
    }
}

impl SecretProvider for StaticSecretProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.secrets.get(key).cloned().filter(|v| !v.is_empty())
    }
}

/// 内存审计接收器，记录所有审计事件供断言
#[derive(Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn emit(&self, record: &AuditRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

/// 创建测试应用状态
///
/// 返回内存审计接收器的句柄，测试可以断言审计记录的条数与内容。
pub fn create_test_app_state(
    secrets: StaticSecretProvider,
) -> (Arc<AppState>, Arc<MemoryAuditSink>) {
    let config = create_test_config();

    let sink = Arc::new(MemoryAuditSink::default());
    let audit_service = Arc::new(AuditService::new(sink.clone()));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(secrets),
        audit_service.clone(),
        &config,
    ));

    let state = Arc::new(AppState {
        config,
        auth_service,
        audit_service,
    });

    (state, sink)
}

/// 生成测试密码哈希
pub fn bcrypt_hash_of(password: &str) -> String {
    bcrypt::hash(password, TEST_BCRYPT_COST).expect("bcrypt hashing should succeed")
}

/// 读取响应体为 JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
