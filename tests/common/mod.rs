#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use profile_backend::{
    AppState,
    cache::{KeyValueStore, MemoryStore, SessionCacheOperations},
    config::Config,
    create_router,
    identity::Auth0Client,
    models::UserProfile,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

/// 测试环境：内存存储 + 模拟的 userinfo 接口
pub struct TestHarness {
    pub server: MockServer,
    pub store: MemoryStore,
    pub config: Config,
    pub app: Router,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(customize: impl FnOnce(&mut Config)) -> Self {
        let store = MemoryStore::new();
        Self::with_store(customize, store.clone(), Arc::new(store)).await
    }

    /// 使用自定义存储构建，`store` 字段仍为一个独立的内存存储
    pub async fn with_store(
        customize: impl FnOnce(&mut Config),
        store: MemoryStore,
        backend: Arc<dyn KeyValueStore>,
    ) -> Self {
        let server = MockServer::start().await;

        let mut config = Config::with_domain("tenant.example.com");
        customize(&mut config);

        let identity = Auth0Client::new(
            format!("{}/userinfo", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let state = AppState {
            config: config.clone(),
            store: backend,
            identity: Arc::new(identity),
        };

        Self {
            server,
            store,
            config,
            app: create_router(state),
        }
    }

    pub async fn mock_userinfo(&self, token: &str, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn make_request(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn seed_profile(&self, token: &str, profile: Value) {
        let profile: UserProfile = serde_json::from_value(profile).unwrap();
        SessionCacheOperations::cache_profile(&self.store, token, &profile, self.config.session_ttl())
            .await
            .unwrap();
    }

    /// 后台缓存写入不阻塞请求，轮询直到写入可见
    pub async fn wait_for_cached(&self, token: &str) -> Option<UserProfile> {
        for _ in 0..200 {
            if let Some(profile) = SessionCacheOperations::get_cached_profile(&self.store, token)
                .await
                .unwrap()
            {
                return Some(profile);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        None
    }

    pub async fn counter(&self) -> i64 {
        self.store.incr("apicounter", 0).await.unwrap()
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn hello_request(token: Option<&str>) -> Request<Body> {
    get("/hello", token)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
