use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display name used when the geodata source carries no `name` tag.
pub const UNNAMED_PLACE: &str = "Unnamed";

/// One finalized place record. Created once per geodata element, enriched
/// exactly once, then held immutably until the next fetch replaces the
/// whole list.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Always derived from (`name`, `latitude`, `longitude`), never stored
    /// independently of them.
    pub map_link: String,
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_logo_is_skipped_when_serializing() {
        let record = Restaurant {
            id: 1,
            name: "Burger Co".to_owned(),
            address: crate::address::NO_ADDRESS.to_owned(),
            latitude: 43.8,
            longitude: -111.8,
            map_link: crate::maps::search_link("Burger Co", 43.8, -111.8),
            logo_url: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("logoUrl").is_none());
        assert_eq!(json["mapLink"], record.map_link);
        assert_eq!(json["latitude"], 43.8);
    }
}
