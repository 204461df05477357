use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::UserProfile;

/// 缺少昵称时使用的占位名
pub const ANONYMOUS: &str = "anonymous";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub user: Option<UserProfile>,
    pub now: DateTime<Utc>,
    pub apicounter: i64,
}

pub fn greeting(profile: Option<&UserProfile>) -> String {
    let nickname = profile.and_then(UserProfile::nickname).unwrap_or(ANONYMOUS);
    format!("Hello {}", nickname)
}
