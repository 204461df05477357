use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::store::{KeyValueStore, StoreError, StoreResult, keyspace_key};

/// 带过期时间的缓存条目
#[derive(Clone, Debug)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// 默认清理间隔：写入时距上次清理超过该时长才扫描全部条目
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Entries {
    map: HashMap<String, Entry>,
    last_sweep: Instant,
}

impl Entries {
    // 移除所有已过期条目
    fn sweep(&mut self) {
        self.map.retain(|_, entry| !entry.is_expired());
        self.last_sweep = Instant::now();
    }
}

/// 进程内键值存储，用于单实例部署和测试
///
/// 过期条目在读取同一键时惰性移除，另外每次写入时按清理间隔
/// 扫描一次，令牌不断更换时占用的内存也不会无限增长。
#[derive(Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<Entries>>,
    counters: Arc<RwLock<HashMap<String, i64>>>,
    sweep_interval: Duration,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_sweep_interval(DEFAULT_SWEEP_INTERVAL)
    }

    pub fn with_sweep_interval(sweep_interval: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries {
                map: HashMap::new(),
                last_sweep: Instant::now(),
            })),
            counters: Arc::new(RwLock::new(HashMap::new())),
            sweep_interval,
        }
    }

    /// 当前未过期的条目数
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.map.values().filter(|e| !e.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str, keyspace: &str) -> StoreResult<Option<String>> {
        let full_key = keyspace_key(keyspace, key);
        let entries = self.entries.read().await;

        match entries.map.get(&full_key) {
            Some(entry) if entry.is_expired() => {
                drop(entries);
                // 惰性清理过期条目
                let mut entries = self.entries.write().await;
                if entries.map.get(&full_key).is_some_and(Entry::is_expired) {
                    entries.map.remove(&full_key);
                }
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        keyspace: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };

        let mut entries = self.entries.write().await;
        if entries.last_sweep.elapsed() >= self.sweep_interval {
            entries.sweep();
        }
        entries.map.insert(keyspace_key(keyspace, key), entry);
        Ok(())
    }

    async fn incr(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut counters = self.counters.write().await;
        let count = counters.entry(key.to_string()).or_insert(0);
        *count = count
            .checked_add(delta)
            .ok_or_else(|| StoreError::Overflow(key.to_string()))?;
        Ok(*count)
    }
}
