use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{IdentityError, IdentityProvider};
use crate::config::Config;
use crate::models::UserProfile;

/// Auth0 userinfo 接口客户端
#[derive(Clone)]
pub struct Auth0Client {
    http: Client,
    userinfo_url: String,
}

impl Auth0Client {
    pub fn new(userinfo_url: impl Into<String>, timeout: Duration) -> Result<Self, IdentityError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(IdentityError::Request)?;

        Ok(Self {
            http,
            userinfo_url: userinfo_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, IdentityError> {
        Self::new(config.userinfo_url(), config.userinfo_timeout())
    }

    pub fn userinfo_url(&self) -> &str {
        &self.userinfo_url
    }
}

#[async_trait]
impl IdentityProvider for Auth0Client {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, IdentityError> {
        let resp = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(IdentityError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IdentityError::Status(status));
        }

        resp.json::<UserProfile>()
            .await
            .map_err(IdentityError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> Auth0Client {
        Auth0Client::new(
            format!("{}/userinfo", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn from_config_targets_domain_userinfo() {
        let client = Auth0Client::from_config(&Config::with_domain("tenant.auth0.com")).unwrap();
        assert_eq!(client.userinfo_url(), "https://tenant.auth0.com/userinfo");
    }

    #[tokio::test]
    async fn forwards_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", "Bearer abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "nickname": "alice" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let profile = client_for(&server).await.fetch_profile("abc123").await.unwrap();
        assert_eq!(profile.nickname(), Some("alice"));
    }

    #[tokio::test]
    async fn non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_profile("expired").await.unwrap_err();
        assert!(matches!(err, IdentityError::Status(s) if s.as_u16() == 401));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_profile("abc").await.unwrap_err();
        assert!(matches!(err, IdentityError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_request_error() {
        let client = Auth0Client::new("http://127.0.0.1:9/userinfo", Duration::from_secs(2)).unwrap();

        let err = client.fetch_profile("abc").await.unwrap_err();
        assert!(matches!(err, IdentityError::Request(_)));
    }
}
