//! 用户相关模型

use serde::{Deserialize, Serialize};

/// 用户查询参数
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub id: i64,
}

/// 用户信息响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_serializes() {
        let user = UserResponse {
            id: 7,
            name: "Alice".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Alice");
    }
}
