// 缓存模块
// 包含键值存储抽象、存储实现以及缓存操作逻辑

pub mod keys;
pub mod memory;
pub mod operations;
pub mod redis_store;
pub mod store;

// 重新导出常用类型和函数，方便其他模块使用
pub use memory::MemoryStore;
pub use operations::{ApiCounterOperations, SessionCacheOperations};
pub use redis_store::RedisStore;
pub use store::{KeyValueStore, StoreError};
