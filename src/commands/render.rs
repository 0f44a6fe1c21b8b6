use crate::models::profile::ProfileCard;
use crate::services::lookup_service::LookupState;
use serde_json::json;

pub const TITLE: &str = "Kick Streamer Lookup";
pub const LOADING_TEXT: &str = "Pulling profile...";
pub const IDLE_HINT: &str = "Enter a username (cirusthavirus, xqc, loochy...)";

/// Text surface for one widget state.
pub fn render_state(state: &LookupState, default_avatar_url: &str) -> String {
    match state {
        LookupState::Idle => IDLE_HINT.to_string(),
        LookupState::Loading { .. } => LOADING_TEXT.to_string(),
        LookupState::Failed { message } => message.clone(),
        LookupState::Success { result } => render_card(&ProfileCard::new(result, default_avatar_url)),
    }
}

pub fn render_card(card: &ProfileCard) -> String {
    let mut lines = Vec::with_capacity(8);

    if card.verified {
        lines.push(format!("{} ✓", card.display_name));
    } else {
        lines.push(card.display_name.clone());
    }
    lines.push(format!("  Avatar:    {}", card.avatar_url));
    lines.push(format!("  Bio:       {}", card.bio));
    lines.push(format!("  Followers: {}", card.followers));
    lines.push(format!("  Status:    {}", card.status));
    if let Some(viewers) = &card.viewers {
        lines.push(format!("  Viewers:   {}", viewers));
    }
    lines.push(format!("  Joined:    {}", card.joined));

    lines.join("\n")
}

/// JSON surface: the card on success, `{"error": ...}` on failure.
pub fn render_json(state: &LookupState, default_avatar_url: &str) -> serde_json::Value {
    match state {
        LookupState::Success { result } => {
            serde_json::to_value(ProfileCard::new(result, default_avatar_url)).unwrap_or_else(
                |e| json!({ "error": format!("Failed to serialize profile: {}", e) }),
            )
        }
        LookupState::Failed { message } => json!({ "error": message }),
        LookupState::Loading { username } => json!({ "loading": username }),
        LookupState::Idle => json!({}),
    }
}
