use async_trait::async_trait;

use crate::{LogoHints, LogoProvider, LookupError, Strategy};

pub const LOGO_API_URL: &str = "https://api.kickfire.com/logo";

/// Guesses the brand's domain as `{site_token}.com` and asks the logo
/// service for it. A 200 means the resolved request URL itself serves the
/// image.
pub struct KickfireProvider {
    http: reqwest::Client,
}

impl KickfireProvider {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LogoProvider for KickfireProvider {
    fn strategy(&self) -> Strategy {
        Strategy::DomainGuess
    }

    async fn lookup(&self, hints: &LogoHints) -> Result<Option<String>, LookupError> {
        let Some(token) = &hints.site_token else {
            return Ok(None);
        };

        let website = format!("{token}.com");
        log::debug!("requesting kickfire logo for '{website}'");
        let response = self
            .http
            .get(LOGO_API_URL)
            .query(&[("website", website.as_str())])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::OK {
            Ok(Some(response.url().to_string()))
        } else {
            Ok(None)
        }
    }
}
