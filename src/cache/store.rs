//! 键值存储抽象
//!
//! 中间件和路由只依赖 `get` / `set` / `incr` 三个操作，
//! 具体由 Redis 或内存实现提供。

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("counter overflow on key {0}")]
    Overflow(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键空间中的值，不存在或已过期时返回 `None`
    async fn get(&self, key: &str, keyspace: &str) -> StoreResult<Option<String>>;

    /// 写入键空间，`ttl` 为 `None` 时永不过期
    async fn set(
        &self,
        key: &str,
        value: &str,
        keyspace: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<()>;

    /// 原子地把计数器加上 `delta`，返回新值
    async fn incr(&self, key: &str, delta: i64) -> StoreResult<i64>;
}

/// 键空间内的完整存储键
pub fn keyspace_key(keyspace: &str, key: &str) -> String {
    format!("{}:{}", keyspace, key)
}
