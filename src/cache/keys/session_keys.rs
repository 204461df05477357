/// 会话缓存所在的键空间
pub const SESSIONS_KEYSPACE: &str = "sessions";

/// 接口调用计数器键
pub const API_COUNTER_KEY: &str = "apicounter";

/// 令牌缓存键前缀
const TOKEN_PREFIX: &str = "token-";

/// 生成令牌对应的用户资料缓存键
pub fn session_token_key(token: &str) -> String {
    format!("{}{}", TOKEN_PREFIX, token)
}
