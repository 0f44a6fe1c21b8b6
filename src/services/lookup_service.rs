use crate::models::error::LookupError;
use crate::models::profile::ProfileQueryResult;
use crate::services::kick_service::ChannelSource;
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

pub const SUBMIT_LABEL: &str = "Lookup Streamer";
pub const SUBMIT_LABEL_LOADING: &str = "Fetching...";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LookupState {
    Idle,
    Loading { username: String },
    Success { result: ProfileQueryResult },
    Failed { message: String },
}

struct WidgetState {
    input: String,
    phase: LookupState,
    /// Bumped on every lookup start; responses for older generations are dropped.
    generation: u64,
}

/// The lookup component: owns the input text and the current state.
///
/// The state lock is never held across an await, so overlapping lookups only
/// contend for the few instructions that swap the phase.
pub struct LookupWidget<S> {
    source: S,
    state: Mutex<WidgetState>,
}

impl<S: ChannelSource> LookupWidget<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(WidgetState {
                input: String::new(),
                phase: LookupState::Idle,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        // A panic elsewhere never leaves the phase half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the input text. Whitespace is trimmed as it is entered.
    pub fn set_input(&self, text: &str) {
        self.lock().input = text.trim().to_string();
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn state(&self) -> LookupState {
        self.lock().phase.clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.lock().phase, LookupState::Loading { .. })
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        let state = self.lock();
        !state.input.trim().is_empty() && !matches!(state.phase, LookupState::Loading { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }

    /// Look up whatever is currently in the input.
    pub async fn submit(&self) -> LookupState {
        let username = self.input();
        self.perform_lookup(&username).await
    }

    /// Run one lookup. The previous result or error is cleared before the
    /// request goes out, and the new state is returned.
    pub async fn perform_lookup(&self, username: &str) -> LookupState {
        let username = username.trim();

        let generation = {
            let mut state = self.lock();

            // Blank input never starts a lookup, and never disturbs one in flight
            if username.is_empty() {
                warn!("[Lookup] Rejected empty username");
                let rejected = LookupState::Failed {
                    message: LookupError::EmptyInput.to_string(),
                };
                if !matches!(state.phase, LookupState::Loading { .. }) {
                    state.phase = rejected.clone();
                }
                return rejected;
            }

            state.generation += 1;
            state.phase = LookupState::Loading {
                username: username.to_string(),
            };
            state.generation
        };

        info!("[Lookup] Looking up: {} (#{})", username, generation);

        let outcome = match self.source.fetch_channel(username).await {
            Ok(channel) => LookupState::Success {
                result: ProfileQueryResult::from(channel),
            },
            Err(e) => LookupState::Failed {
                message: e.to_string(),
            },
        };

        let mut state = self.lock();
        if state.generation != generation {
            debug!(
                "[Lookup] Dropping stale response for {} (#{}, current #{})",
                username, generation, state.generation
            );
            return state.phase.clone();
        }

        match &outcome {
            LookupState::Success { .. } => info!("[Lookup] Loaded profile for {}", username),
            LookupState::Failed { message } => warn!("[Lookup] {} failed: {}", username, message),
            _ => {}
        }

        state.phase = outcome;
        state.phase.clone()
    }
}
