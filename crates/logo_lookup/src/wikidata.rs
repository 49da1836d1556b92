use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{LogoHints, LogoProvider, LookupError, Strategy};

pub const ENTITY_DATA_URL: &str = "https://www.wikidata.org/wiki/Special:EntityData";
pub const FILE_PATH_URL: &str = "https://commons.wikimedia.org/wiki/Special:FilePath";

/// Wikidata property holding an entity's logo image.
const LOGO_PROPERTY: &str = "P154";

#[derive(Debug, Clone, Deserialize)]
pub struct EntityData {
    #[serde(default)]
    pub entities: HashMap<String, Entity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
    pub mainsnak: MainSnak,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainSnak {
    pub datavalue: Option<DataValue>,
}

/// Claim values are property-dependent; only string values (media file
/// names) are of interest here.
#[derive(Debug, Clone, Deserialize)]
pub struct DataValue {
    pub value: serde_json::Value,
}

impl EntityData {
    /// File name stored in the first logo claim of the given entity, if any.
    pub fn logo_file(&self, entity_id: &str) -> Option<&str> {
        self.entities
            .get(entity_id)?
            .claims
            .get(LOGO_PROPERTY)?
            .first()?
            .mainsnak
            .datavalue
            .as_ref()?
            .value
            .as_str()
    }
}

pub struct WikidataProvider {
    http: reqwest::Client,
}

impl WikidataProvider {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LogoProvider for WikidataProvider {
    fn strategy(&self) -> Strategy {
        Strategy::KnowledgeBase
    }

    async fn lookup(&self, hints: &LogoHints) -> Result<Option<String>, LookupError> {
        let Some(brand_id) = &hints.brand_id else {
            return Ok(None);
        };

        let url = format!("{ENTITY_DATA_URL}/{brand_id}.json");
        log::debug!("requesting wikidata entity '{brand_id}'");
        let response = self.http.get(&url).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }

        let data: EntityData = serde_json::from_str(&response.text().await?)?;
        Ok(data
            .logo_file(brand_id)
            .map(|file| format!("{FILE_PATH_URL}/{file}")))
    }
}
