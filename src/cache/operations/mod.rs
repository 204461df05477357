/// 缓存操作
/// 提供缓存操作的功能实现

// 会话缓存操作
pub mod session;

// 计数器操作
pub mod counter;

// 重新导出常用操作
pub use counter::ApiCounterOperations;
pub use session::SessionCacheOperations;
