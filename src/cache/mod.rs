// 缓存模块
// 用户记录在 Redis 中的投影，带固定过期时间

pub mod keys;
pub mod operations;

use async_trait::async_trait;

pub use keys::user_key;
pub use operations::user::RedisUserCache;

/// 用户缓存过期时间（秒）
pub const USER_CACHE_TTL_SECS: u64 = 3600;

/// 键值缓存的最小操作集合，处理器只依赖这个 trait
#[async_trait]
pub trait UserCache: Send + Sync {
    /// 写入键值并设置过期时间
    async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> Result<(), redis::RedisError>;

    /// 读取键值，键不存在或已过期时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError>;
}
