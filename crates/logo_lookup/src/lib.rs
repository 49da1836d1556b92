use std::error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

pub mod kickfire;
pub mod wikidata;

/// Surface the screen is running on. Each surface forbids one of the two
/// lookup strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Web,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Structured-entity query against the Wikidata knowledge base.
    KnowledgeBase,
    /// Domain guess against the Kickfire logo service.
    DomainGuess,
}

impl Platform {
    /// Capability matrix: the knowledge-base lookup is unavailable on
    /// Android, the domain guess is unavailable on the web.
    pub fn allows(&self, strategy: Strategy) -> bool {
        !matches!(
            (self, strategy),
            (Platform::Android, Strategy::KnowledgeBase) | (Platform::Web, Strategy::DomainGuess)
        )
    }
}

/// Lower-case a place name and strip whitespace and apostrophes, yielding
/// the token used to guess the brand's web domain.
pub fn site_token(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\'')
        .collect()
}

/// Per-place inputs the strategies work from. Either hint may be missing;
/// a strategy whose hint is absent reports a miss instead of an error.
#[derive(Debug, Clone, Default)]
pub struct LogoHints {
    pub brand_id: Option<String>,
    pub site_token: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LookupError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
}

impl error::Error for LookupError {}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            LookupError::JsonError(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::JsonError(Arc::new(e))
    }
}

/// One logo-resolution strategy. `lookup` returns `Ok(None)` both when its
/// hint is missing and when the service has no logo for the place.
#[async_trait]
pub trait LogoProvider {
    fn strategy(&self) -> Strategy;

    async fn lookup(&self, hints: &LogoHints) -> Result<Option<String>, LookupError>;
}

/// Ordered attempt list over the configured providers. Best effort only:
/// a failing strategy counts as a miss for that strategy and the next one
/// runs.
pub struct LogoResolver {
    platform: Platform,
    providers: Vec<Box<dyn LogoProvider + Send + Sync>>,
}

impl LogoResolver {
    /// Resolver with the default strategy order: knowledge base first, then
    /// the domain guess.
    pub fn new(platform: Platform) -> Self {
        let http = reqwest::Client::new();
        Self::with_providers(
            platform,
            vec![
                Box::new(wikidata::WikidataProvider::new(http.clone())),
                Box::new(kickfire::KickfireProvider::new(http)),
            ],
        )
    }

    pub fn with_providers(
        platform: Platform,
        providers: Vec<Box<dyn LogoProvider + Send + Sync>>,
    ) -> Self {
        Self {
            platform,
            providers,
        }
    }

    /// Try each strategy the platform permits, in order; first hit wins.
    pub async fn resolve(&self, hints: &LogoHints) -> Option<String> {
        for provider in &self.providers {
            if !self.platform.allows(provider.strategy()) {
                continue;
            }
            match provider.lookup(hints).await {
                Ok(Some(url)) => return Some(url),
                Ok(None) => {}
                Err(why) => {
                    log::debug!("logo lookup ({:?}) failed: {}", provider.strategy(), why);
                }
            }
        }
        None
    }
}
