//! 用户 API 服务库
//! 提供共享类型和工具

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod secrets;
pub mod services;
pub mod telemetry;
