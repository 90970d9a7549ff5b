//! 审计日志服务

use crate::models::audit::{AuditEvent, AuditRecord};
use std::sync::Arc;

/// 审计接收器
///
/// 接收器必须支持并发写入；每条记录作为整体一次性输出，
/// 并发请求的记录可以交错但不能被撕裂。
pub trait AuditSink: Send + Sync {
    fn emit(&self, record: &AuditRecord);
}

/// 基于 tracing 的审计接收器
///
/// 每条审计记录作为一行结构化日志输出，固定级别 info，
/// 固定字段 event / user / request_id。
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn emit(&self, record: &AuditRecord) {
        tracing::info!(
            target: "audit",
            event = record.event.as_str(),
            user = %record.user,
            request_id = %record.request_id,
            "Login attempt recorded"
        );
    }
}

pub struct AuditService {
    sink: Arc<dyn AuditSink>,
}

impl AuditService {
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    /// 记录一次登录尝试的结果
    ///
    /// 同步执行，handler 返回之前记录必然已经写出。
    /// 每次登录尝试恰好产生一条记录。
    pub fn record(&self, event: AuditEvent, username: &str, request_id: &str) {
        let record = AuditRecord {
            event,
            user: username.to_string(),
            request_id: request_id.to_string(),
        };

        self.sink.emit(&record);
    }
}
