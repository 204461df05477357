use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::{
    AppState,
    cache::SessionCacheOperations,
    error::AppError,
};

/// 解析调用方的用户资料并放入请求扩展
///
/// 缓存命中时直接使用缓存；未命中时请求身份提供方，
/// 并在后台写回缓存，不阻塞当前请求。
/// 缺少或格式错误的 `Authorization` 头一律返回 401。
pub async fn profile_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::warn!("Rejected request without bearer token");
        AppError::Unauthorized
    })?;

    if let Some(profile) =
        SessionCacheOperations::get_cached_profile(state.store.as_ref(), &token).await?
    {
        tracing::debug!("User fetched from cache");
        request.extensions_mut().insert(profile);
        return Ok(next.run(request).await);
    }

    tracing::debug!("Fetching user from identity provider");
    let profile = state.identity.fetch_profile(&token).await?;

    // 写缓存失败只记录日志，不影响响应
    let store = state.store.clone();
    let ttl = state.config.session_ttl();
    let cached = profile.clone();
    tokio::spawn(async move {
        if let Err(e) =
            SessionCacheOperations::cache_profile(store.as_ref(), &token, &cached, ttl).await
        {
            tracing::warn!("Failed to cache user profile: {}", e);
        }
    });

    request.extensions_mut().insert(profile);
    Ok(next.run(request).await)
}

/// 提取持有者令牌，空令牌视为缺失
fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().trim().to_string())
        .filter(|token| !token.is_empty())
}
