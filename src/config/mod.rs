use std::env;
use std::time::Duration;

/// 默认会话缓存时长：二十分钟（毫秒）
pub const DEFAULT_SESSION_TTL_MS: u64 = 1000 * 60 * 20;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub auth0_domain: String,
    pub redis_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub session_ttl_ms: u64,
    pub userinfo_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            auth0_domain: env::var("AUTH0_DOMAIN")?,
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_base_uri: env::var("API_BASE_URI")
                .map(|uri| normalize_base_uri(&uri))
                .unwrap_or_default(),
            session_ttl_ms: env::var("SESSION_TTL_MS")
                .ok()
                .and_then(|ttl| ttl.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_MS),
            userinfo_timeout_secs: env::var("USERINFO_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
            cors_allowed_origins,
        })
    }

    /// 以默认值构建配置，只需要身份提供方域名
    pub fn with_domain(auth0_domain: impl Into<String>) -> Self {
        Config {
            auth0_domain: auth0_domain.into(),
            redis_url: None,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            api_base_uri: String::new(),
            session_ttl_ms: DEFAULT_SESSION_TTL_MS,
            userinfo_timeout_secs: 10,
            cors_allowed_origins: Vec::new(),
        }
    }

    pub fn userinfo_url(&self) -> String {
        format!("https://{}/userinfo", self.auth0_domain)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_millis(self.session_ttl_ms)
    }

    pub fn userinfo_timeout(&self) -> Duration {
        Duration::from_secs(self.userinfo_timeout_secs)
    }
}

/// 路由前缀统一为 `/xxx` 形式，空值表示挂在根路径
fn normalize_base_uri(uri: &str) -> String {
    let trimmed = uri.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
