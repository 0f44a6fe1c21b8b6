use crate::models::channel::ChannelResponse;
use crate::models::error::LookupError;
use crate::models::settings::Settings;
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use log::{debug, error, info};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Anything that can resolve a username to a raw channel payload.
pub trait ChannelSource: Send + Sync {
    fn fetch_channel<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<ChannelResponse, LookupError>>;
}

pub struct KickService {
    client: Client,
    api_base: Url,
    user_agent: String,
}

impl KickService {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut base = settings.api_base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let api_base = Url::parse(&base)
            .with_context(|| format!("Invalid API base URL: {}", settings.api_base))?;

        let mut builder = Client::builder().gzip(true);
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base,
            user_agent: settings.user_agent.clone(),
        })
    }

    /// `{api_base}/api/v2/channels/{username}` with the username percent-encoded.
    pub fn channel_url(&self, username: &str) -> Result<Url> {
        let path = format!("api/v2/channels/{}", urlencoding::encode(username));
        self.api_base
            .join(&path)
            .with_context(|| format!("Failed to build channel URL for {}", username))
    }

    pub async fn get_channel(&self, username: &str) -> Result<ChannelResponse, LookupError> {
        let url = self
            .channel_url(username)
            .map_err(|e| LookupError::NetworkError(format!("{:#}", e)))?;

        info!("[KickService] Looking up: {}", username);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                error!("[KickService] Fetch failed: {}", e);
                LookupError::from(e)
            })?;

        let status = response.status();
        info!("[KickService] API status: {}", status.as_u16());

        if !status.is_success() {
            error!("[KickService] Fetch failed with status {}", status.as_u16());
            return Err(LookupError::HttpError(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            error!("[KickService] Failed to read response body: {}", e);
            LookupError::from(e)
        })?;
        debug!("[KickService] Raw API data: {}", body);

        serde_json::from_str::<ChannelResponse>(&body).map_err(|e| {
            error!("[KickService] Failed to parse channel payload: {}", e);
            LookupError::from(e)
        })
    }
}

impl ChannelSource for KickService {
    fn fetch_channel<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<ChannelResponse, LookupError>> {
        Box::pin(self.get_channel(username))
    }
}
