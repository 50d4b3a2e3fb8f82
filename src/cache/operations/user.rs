use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

use crate::cache::UserCache;

/// 基于 Redis 多路复用连接的用户缓存
///
/// 连接可以廉价克隆，所有请求共享同一条底层连接。
#[derive(Clone)]
pub struct RedisUserCache {
    conn: MultiplexedConnection,
}

impl RedisUserCache {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.conn.clone();
        let result: Option<String> = conn.get(key).await?;
        Ok(result)
    }
}
