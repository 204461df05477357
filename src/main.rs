use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use profile_backend::{
    AppState,
    cache::{KeyValueStore, MemoryStore, RedisStore},
    config::Config,
    create_router,
    identity::Auth0Client,
};
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
    let config = Config::from_env().expect("Failed to load configuration: AUTH0_DOMAIN is required");

    // 设置键值存储，未配置 Redis 时使用进程内存储
    let store: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(url) => {
            tracing::info!("Using Redis session store");
            Arc::new(RedisStore::open(url).expect("Failed to create Redis client"))
        }
        None => {
            tracing::warn!("REDIS_URL not set, using in-memory session store");
            Arc::new(MemoryStore::new())
        }
    };

    // 设置身份提供方客户端
    let identity = Auth0Client::from_config(&config).expect("Failed to create HTTP client");
    tracing::info!("Resolving user profiles via {}", identity.userinfo_url());

    // 设置应用状态
    let state = AppState {
        config: config.clone(),
        store,
        identity: Arc::new(identity),
    };

    let app = create_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!(
        "Server listening on {}, session ttl {}ms",
        addr,
        config.session_ttl_ms
    );
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
