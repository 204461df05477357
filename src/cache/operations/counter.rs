use crate::cache::keys::API_COUNTER_KEY;
use crate::cache::store::KeyValueStore;
use crate::error::AppError;

/// 接口调用计数器操作
pub struct ApiCounterOperations;

impl ApiCounterOperations {
    /// 计数器加一并返回新值
    pub async fn increment(store: &dyn KeyValueStore) -> Result<i64, AppError> {
        let count = store.incr(API_COUNTER_KEY, 1).await?;
        Ok(count)
    }
}
