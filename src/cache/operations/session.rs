use std::time::Duration;

use crate::cache::keys::{SESSIONS_KEYSPACE, session_token_key};
use crate::cache::store::KeyValueStore;
use crate::error::AppError;
use crate::models::UserProfile;

/// 会话（用户资料）缓存操作
pub struct SessionCacheOperations;

impl SessionCacheOperations {
    /// 获取令牌对应的缓存用户资料
    pub async fn get_cached_profile(
        store: &dyn KeyValueStore,
        token: &str,
    ) -> Result<Option<UserProfile>, AppError> {
        let key = session_token_key(token);
        let result = store.get(&key, SESSIONS_KEYSPACE).await?;

        match result {
            Some(json) => {
                let profile = serde_json::from_str(&json)?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// 缓存用户资料，过期后由存储自行淘汰
    pub async fn cache_profile(
        store: &dyn KeyValueStore,
        token: &str,
        profile: &UserProfile,
        ttl: Duration,
    ) -> Result<(), AppError> {
        let key = session_token_key(token);
        let json = serde_json::to_string(profile)?;

        store.set(&key, &json, SESSIONS_KEYSPACE, Some(ttl)).await?;

        Ok(())
    }
}
