use redis::aio::MultiplexedConnection;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;

use crate::{AppState, config::Config, database::ensure_schema};

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Redis: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("PostgreSQL: {0}")]
    Postgres(#[from] sqlx::Error),
}

/// 初始化完成后的依赖集合，拿到它才能开始监听
pub struct Ready {
    pub pool: PgPool,
    pub redis: MultiplexedConnection,
}

impl Ready {
    pub fn state(&self) -> AppState {
        AppState::from_clients(self.pool.clone(), self.redis.clone())
    }

    /// 先断开 Redis，再关闭数据库连接池
    pub async fn close(self) {
        drop(self.redis);
        tracing::info!("Redis connection closed");
        self.pool.close().await;
        tracing::info!("PostgreSQL pool closed");
    }
}

/// 按顺序连接 Redis、连接 PostgreSQL 并建表
pub async fn initialize(config: &Config) -> Result<Ready, InitError> {
    let client = redis::Client::open(config.redis_url.as_str())?;
    let redis = client.get_multiplexed_async_connection().await?;
    tracing::info!("Connected to Redis");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'pg_redis_bench';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await?;

    ensure_schema(&pool).await?;

    Ok(Ready { pool, redis })
}

/// 等待 SIGTERM 或 Ctrl-C
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, closing connections...");
}
