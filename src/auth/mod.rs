//! 认证组件

pub mod password;

pub use password::PasswordVerifier;
