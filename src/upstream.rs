use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::UpstreamError;
use crate::models::availability::RawAvailability;

pub const DEFAULT_AVAILABILITY_URL: &str = "https://www.thinkful.com/api/advisors/availability";

/// Source of raw advisor availability.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    async fn fetch(&self) -> Result<RawAvailability, UpstreamError>;
}

/// Live feed over HTTP. No timeout and no retries: a hung upstream call
/// parks only the request that made it.
pub struct HttpAvailabilitySource {
    client: Client,
    url: Url,
}

impl HttpAvailabilitySource {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl AvailabilitySource for HttpAvailabilitySource {
    async fn fetch(&self) -> Result<RawAvailability, UpstreamError> {
        let response = self.client.get(self.url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status().to_string()));
        }

        // Deserialized straight into the day -> time -> advisor shape. A
        // structurally different payload fails the request here; odd advisor
        // id values inside that shape pass through untouched.
        Ok(response.json::<RawAvailability>().await?)
    }
}
