use std::net::{IpAddr, SocketAddr};

use pg_redis_bench::{config::Config, routes, startup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Initialization error: {}", e);
            std::process::exit(1);
        }
    };

    // 连接 Redis 和 PostgreSQL，完成前不监听端口
    let ready = match startup::initialize(&config).await {
        Ok(ready) => ready,
        Err(e) => {
            tracing::error!("Initialization error: {}", e);
            std::process::exit(1);
        }
    };

    let router = routes::create_router(ready.state());

    // 开发模式下允许所有来源跨域
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to 0.0.0.0");
            IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
        }),
        config.server_port,
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            ready.close().await;
            std::process::exit(1);
        }
    };
    tracing::info!("Server running on {}", addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await;

    ready.close().await;

    if let Err(e) = served {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
