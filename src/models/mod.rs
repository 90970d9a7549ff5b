//! 数据模型

pub mod audit;
pub mod auth;
pub mod user;
