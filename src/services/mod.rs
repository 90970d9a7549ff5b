//! 业务服务层

pub mod audit_service;
pub mod auth_service;

pub use audit_service::{AuditService, AuditSink, TracingAuditSink};
pub use auth_service::AuthService;
