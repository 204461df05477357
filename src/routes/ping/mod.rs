use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

/// Ping响应
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    /// 服务状态
    pub status: String,
    /// 服务器时间
    pub timestamp: i64,
}

/// 健康检查接口，不需要认证
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(PingResponse {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }),
    )
}
