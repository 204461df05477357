use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 身份提供方 userinfo 接口返回的用户资料
///
/// 字段由身份提供方决定，这里只原样保存，
/// 需要时通过访问器读取个别字段。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub Map<String, Value>);

impl UserProfile {
    /// 显示用昵称，缺失或不是字符串时返回 `None`
    pub fn nickname(&self) -> Option<&str> {
        self.0.get("nickname").and_then(Value::as_str)
    }

    pub fn claims(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_arbitrary_claims() {
        let profile: UserProfile = serde_json::from_value(json!({
            "sub": "auth0|123",
            "nickname": "alice",
            "email_verified": true
        }))
        .unwrap();

        assert_eq!(profile.nickname(), Some("alice"));
        assert_eq!(profile.claims().len(), 3);
    }

    #[test]
    fn serializes_as_plain_object() {
        let profile: UserProfile = serde_json::from_str(r#"{"nickname":"alice"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&profile).unwrap(),
            r#"{"nickname":"alice"}"#
        );
    }

    #[test]
    fn non_string_nickname_is_absent() {
        let profile: UserProfile = serde_json::from_value(json!({ "nickname": 42 })).unwrap();
        assert_eq!(profile.nickname(), None);
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(serde_json::from_str::<UserProfile>("[1, 2]").is_err());
    }
}
