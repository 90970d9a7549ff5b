//! 密码校验
//! 基于 bcrypt 对比明文与存储哈希

use crate::error::AppError;

/// 密码校验器
///
/// bcrypt 的 verify 自带恒定时间比较，并兼容 $2a/$2b/$2y
/// 等历史参数集，旧哈希无需迁移即可通过校验。
pub struct PasswordVerifier;

impl PasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    /// 校验明文密码与存储哈希是否匹配
    ///
    /// 哈希格式损坏时按校验失败处理，不会 panic；
    /// 解析错误以 warn 级别记录，便于运维定位配置损坏。
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
        }
    }

    /// 生成密码哈希（运维工具与测试使用）
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::Internal(format!("Failed to hash password: {}", e))
        })
    }
}

impl Default for PasswordVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试用低成本因子，DEFAULT_COST 太慢
    const TEST_COST: u32 = 4;

    #[test]
    fn test_verify_correct_password() {
        let verifier = PasswordVerifier::new();
        let hash = bcrypt::hash("correct-pw", TEST_COST).unwrap();

        assert!(verifier.verify("correct-pw", &hash));
    }

    #[test]
    fn test_verify_wrong_password() {
        let verifier = PasswordVerifier::new();
        let hash = bcrypt::hash("correct-pw", TEST_COST).unwrap();

        assert!(!verifier.verify("wrong-pw", &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_failure_not_panic() {
        let verifier = PasswordVerifier::new();

        assert!(!verifier.verify("any-password", "not-a-bcrypt-hash"));
        assert!(!verifier.verify("any-password", ""));
        assert!(!verifier.verify("any-password", "$2b$invalid"));
    }

    #[test]
    fn test_verify_legacy_prefix() {
        let verifier = PasswordVerifier::new();
        let hash = bcrypt::hash("correct-pw", TEST_COST).unwrap();

        // 旧系统产生的 $2y 前缀哈希必须同样通过校验
        let legacy = hash.replacen("$2b$", "$2y$", 1);
        assert!(verifier.verify("correct-pw", &legacy));
    }

    #[test]
    fn test_verify_empty_password() {
        let verifier = PasswordVerifier::new();
        let hash = bcrypt::hash("", TEST_COST).unwrap();

        assert!(verifier.verify("", &hash));
        assert!(!verifier.verify("nonempty", &hash));
    }

    #[test]
    fn test_hash_is_different_each_time() {
        let verifier = PasswordVerifier::new();

        let hash1 = bcrypt::hash("same-password", TEST_COST).unwrap();
        let hash2 = bcrypt::hash("same-password", TEST_COST).unwrap();

        // 随机盐导致哈希不同，但都能通过校验
        assert_ne!(hash1, hash2);
        assert!(verifier.verify("same-password", &hash1));
        assert!(verifier.verify("same-password", &hash2));
    }
}
