use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::AppConfig;
use crate::error::ExportError;

/// Blocking HTTP fetcher for recipe pages.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &AppConfig) -> Result<Self, ExportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page body. Non-success HTTP statuses are treated as a
    /// fetch failure rather than handing an error page to the extractor.
    pub fn fetch(&self, url: &str) -> Result<String, ExportError> {
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(body)
    }
}
