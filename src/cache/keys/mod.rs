/// 缓存键模块
/// 提供各种缓存键生成函数

// 会话缓存键模块
pub mod session_keys;

// 重新导出常用的键生成函数
pub use session_keys::{API_COUNTER_KEY, SESSIONS_KEYSPACE, session_token_key};
