//! 用户查询处理器

use crate::models::user::{UserQuery, UserResponse};
use axum::{extract::Query, Json};

/// 按 ID 查询用户
///
/// 演示端点：无论 id 为何都返回固定用户名。
pub async fn get_user(Query(query): Query<UserQuery>) -> Json<UserResponse> {
    Json(UserResponse {
        id: query.id,
        name: "Alice".to_string(),
    })
}
