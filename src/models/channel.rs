use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw payload of `GET /api/v2/channels/{username}`.
///
/// Every field is optional. The upstream shape drifts between API revisions,
/// so the follower count is read from any of its known spellings.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ChannelResponse {
    #[serde(default)]
    pub user: Option<ChannelUser>,
    #[serde(
        default,
        alias = "followersCount",
        alias = "follower_count",
        deserialize_with = "lenient_count"
    )]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub livestream: Option<Livestream>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ChannelUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// Kept raw: the API has sent booleans, nulls and objects here.
    #[serde(default)]
    pub verified: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Livestream {
    /// Raw for the same reason as `verified`.
    #[serde(default)]
    pub is_live: Option<Value>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub viewer_count: Option<u64>,
}

impl ChannelUser {
    pub fn is_verified(&self) -> bool {
        self.verified.as_ref().map(is_truthy).unwrap_or(false)
    }
}

impl Livestream {
    pub fn is_live(&self) -> bool {
        self.is_live.as_ref().map(is_truthy).unwrap_or(false)
    }
}

impl ChannelResponse {
    /// `user.created_at` wins over the channel-level timestamp.
    pub fn joined_raw(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.created_at.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| self.created_at.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Truthiness of a JSON value, as the web client evaluated it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Accepts counts sent as integers, floats or numeric strings. Anything else
/// (including negatives) is treated as absent rather than failing the payload.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let payload = json!({
            "user": {
                "username": "xQc",
                "bio": "juicer",
                "profile_pic": "https://files.kick.com/xqc.png",
                "verified": true,
                "created_at": "2022-12-05T10:00:00Z"
            },
            "followers_count": 1_234_567,
            "livestream": { "is_live": true, "viewer_count": 45_210 },
            "created_at": "2023-01-01T00:00:00Z"
        });

        let channel: ChannelResponse = serde_json::from_value(payload).unwrap();
        let user = channel.user.as_ref().unwrap();
        assert_eq!(user.username.as_deref(), Some("xQc"));
        assert!(user.is_verified());
        assert_eq!(channel.followers_count, Some(1_234_567));
        assert_eq!(channel.livestream.as_ref().unwrap().viewer_count, Some(45_210));
        assert_eq!(channel.joined_raw(), Some("2022-12-05T10:00:00Z"));
    }

    #[test]
    fn test_follower_count_aliases() {
        let camel: ChannelResponse = serde_json::from_value(json!({ "followersCount": 10 })).unwrap();
        let singular: ChannelResponse =
            serde_json::from_value(json!({ "follower_count": "2500" })).unwrap();

        assert_eq!(camel.followers_count, Some(10));
        assert_eq!(singular.followers_count, Some(2500));
    }

    #[test]
    fn test_sparse_payload() {
        let channel: ChannelResponse =
            serde_json::from_value(json!({ "livestream": null, "created_at": "2021-06-01" })).unwrap();

        assert!(channel.user.is_none());
        assert!(channel.livestream.is_none());
        assert_eq!(channel.followers_count, None);
        assert_eq!(channel.joined_raw(), Some("2021-06-01"));
    }

    #[test]
    fn test_bad_counts_are_absent() {
        let channel: ChannelResponse = serde_json::from_value(json!({
            "followers_count": -4,
            "livestream": { "is_live": true, "viewer_count": "lots" }
        }))
        .unwrap();

        assert_eq!(channel.followers_count, None);
        assert_eq!(channel.livestream.unwrap().viewer_count, None);
    }

    #[test]
    fn test_is_live_truthiness() {
        let livestream = |v: Value| -> Livestream {
            serde_json::from_value(json!({ "is_live": v, "viewer_count": 9 })).unwrap()
        };

        assert!(livestream(json!(true)).is_live());
        assert!(livestream(json!(1)).is_live());
        assert!(livestream(json!("yes")).is_live());
        assert!(!livestream(json!(null)).is_live());
        assert!(!livestream(json!(0)).is_live());
        assert!(!Livestream::default().is_live());
    }

    #[test]
    fn test_numeric_is_live_does_not_fail_payload() {
        let channel: ChannelResponse = serde_json::from_value(json!({
            "livestream": { "is_live": 1, "viewer_count": 9 }
        }))
        .unwrap();

        let livestream = channel.livestream.unwrap();
        assert!(livestream.is_live());
        assert_eq!(livestream.viewer_count, Some(9));
    }

    #[test]
    fn test_verified_truthiness() {
        let verified = |v: Value| ChannelUser {
            verified: Some(v),
            ..Default::default()
        };

        assert!(verified(json!({ "id": 1 })).is_verified());
        assert!(verified(json!(1)).is_verified());
        assert!(!verified(json!(null)).is_verified());
        assert!(!verified(json!(false)).is_verified());
        assert!(!verified(json!("")).is_verified());
        assert!(!ChannelUser::default().is_verified());
    }
}
