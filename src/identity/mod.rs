//! 身份提供方抽象
//!
//! 中间件只通过 [`IdentityProvider::fetch_profile`] 获取用户资料，
//! 测试中可以替换为模拟实现。

mod auth0;

pub use auth0::Auth0Client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserProfile;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("userinfo request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("userinfo returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("userinfo body is not a profile object: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 用持有者令牌换取用户资料
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, IdentityError>;
}
