//! 密钥来源
//! 运行时从进程环境读取敏感配置，不做缓存

/// 密钥提供者
///
/// 抽象为单方法接口，测试中可以注入内存实现，
/// 不必修改真实的进程环境变量。
pub trait SecretProvider: Send + Sync {
    /// 读取指定键的密钥；未设置或为空时返回 None
    fn get(&self, key: &str) -> Option<String>;
}

/// 基于进程环境变量的密钥提供者
///
/// 每次调用都重新读取环境，登录请求之间不缓存哈希值。
pub struct EnvSecretProvider;

impl SecretProvider for EnvSecretProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}
