use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{
    AppState,
    config::Config,
    middleware::{log_errors, profile_middleware},
    routes,
};

// 公开路由
fn public_routes() -> Router<AppState> {
    Router::new().route("/ping", get(routes::ping::ping))
}

// 需要用户资料的路由
fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/hello", get(routes::hello::hello))
        .route_layer(from_fn_with_state(state.clone(), profile_middleware))
}

// 单页应用跨域调用接口
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(public_routes())
        .merge(protected_routes(&state));

    // 根路径不能 nest，没有前缀时直接使用
    let router = if state.config.api_base_uri.is_empty() {
        api
    } else {
        Router::new().nest(&state.config.api_base_uri, api)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(log_errors))
                .layer(cors_layer(&state.config)),
        )
        .with_state(state)
}
