use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    pub elements: Vec<Element>,
}

/// One point of interest as returned by the interpreter. The tag bag holds
/// the name, brand identifiers and address parts when the mapping community
/// recorded them.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Element {
    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").map(String::as_str)
    }

    pub fn brand_wikidata(&self) -> Option<&str> {
        self.tags.get("brand:wikidata").map(String::as_str)
    }
}
