use crate::models::channel::ChannelResponse;
use crate::utils::format::{format_count, format_long_date, parse_api_date};
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_AVATAR_URL: &str = "https://kick.com/default-avatar.png";
pub const DEFAULT_DISPLAY_NAME: &str = "User";
pub const NO_BIO: &str = "No bio set";
pub const UNKNOWN_JOIN_DATE: &str = "Unknown";

/// Result of one successful lookup. Optional fields mirror what the API omitted.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct ProfileQueryResult {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub follower_count: Option<u64>,
    pub is_live: bool,
    pub viewer_count: Option<u64>,
    pub verified: bool,
    pub joined_date: Option<NaiveDate>,
}

impl From<ChannelResponse> for ProfileQueryResult {
    fn from(channel: ChannelResponse) -> Self {
        let joined_date = channel.joined_raw().and_then(parse_api_date);
        let livestream = channel.livestream.unwrap_or_default();
        let user = channel.user.unwrap_or_default();
        let verified = user.is_verified();

        Self {
            username: non_empty(user.username),
            avatar_url: non_empty(user.profile_pic),
            bio: non_empty(user.bio),
            follower_count: channel.followers_count,
            is_live: livestream.is_live(),
            viewer_count: livestream.viewer_count,
            verified,
            joined_date,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Display-ready view of a [`ProfileQueryResult`] with every fallback applied.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProfileCard {
    pub display_name: String,
    pub avatar_url: String,
    pub verified: bool,
    pub bio: String,
    pub followers: String,
    pub status: String,
    /// Only present while the channel is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers: Option<String>,
    pub joined: String,
}

impl ProfileCard {
    pub fn new(result: &ProfileQueryResult, default_avatar_url: &str) -> Self {
        Self {
            display_name: result
                .username
                .clone()
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            avatar_url: result
                .avatar_url
                .clone()
                .unwrap_or_else(|| default_avatar_url.to_string()),
            verified: result.verified,
            bio: result.bio.clone().unwrap_or_else(|| NO_BIO.to_string()),
            followers: format_count(result.follower_count.unwrap_or(0)),
            status: if result.is_live { "LIVE" } else { "Offline" }.to_string(),
            viewers: result
                .is_live
                .then(|| format_count(result.viewer_count.unwrap_or(0))),
            joined: result
                .joined_date
                .map(format_long_date)
                .unwrap_or_else(|| UNKNOWN_JOIN_DATE.to_string()),
        }
    }
}
