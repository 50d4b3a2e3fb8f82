use std::sync::Arc;

use cache::{RedisUserCache, UserCache};
use database::{PgUserStore, UserStore};

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod result;
pub mod routes;
pub mod startup;

/// 处理器共享的状态，两个存储都以 trait 对象注入
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub cache: Arc<dyn UserCache>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn UserCache>) -> Self {
        Self { store, cache }
    }

    pub fn from_clients(pool: sqlx::PgPool, redis: redis::aio::MultiplexedConnection) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(pool)),
            Arc::new(RedisUserCache::new(redis)),
        )
    }
}
