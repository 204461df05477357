use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use super::store::{KeyValueStore, StoreResult, keyspace_key};

/// Redis 键值存储
#[derive(Clone)]
pub struct RedisStore {
    redis: Arc<RedisClient>,
}

impl RedisStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    pub fn open(redis_url: &str) -> StoreResult<Self> {
        let client = RedisClient::open(redis_url)?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str, keyspace: &str) -> StoreResult<Option<String>> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(keyspace_key(keyspace, key)).await?;
        Ok(result)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        keyspace: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let redis_key = keyspace_key(keyspace, key);
        match ttl {
            // 过期时间以毫秒为单位，交由 Redis 自行淘汰
            Some(ttl) => {
                let millis = ttl.as_millis().max(1) as u64;
                let _: () = conn.pset_ex(redis_key, value, millis).await?;
            }
            None => {
                let _: () = conn.set(redis_key, value).await?;
            }
        }

        Ok(())
    }

    async fn incr(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        // INCRBY 在服务端原子执行
        let count: i64 = conn.incr(key, delta).await?;
        Ok(count)
    }
}
