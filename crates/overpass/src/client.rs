use crate::model::PlacesResponse;
use crate::ApiError;

pub const OVERPASS_API_URL: &str = "https://overpass-api.de/api/interpreter";

/// Named area the fixed query runs against when no search fields are set.
pub const DEFAULT_AREA: &str = "Rexburg";

const AMENITY: &str = "fast_food";

/// Bounded area one query is issued for. Either the fixed named area or the
/// parameterized city-plus-state variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchArea {
    Area { name: String },
    CityState { city: String, state: String },
}

impl SearchArea {
    pub fn default_area() -> Self {
        Self::Area {
            name: DEFAULT_AREA.to_owned(),
        }
    }

    /// Overpass QL program selecting every fast-food amenity in the area.
    /// The city/state variant intersects two named areas.
    pub fn to_query(&self) -> String {
        match self {
            Self::Area { name } => format!(
                "[out:json];\n\
                 area[\"name\"=\"{name}\"]->.searchArea;\n\
                 nwr[\"amenity\"=\"{AMENITY}\"](area.searchArea);\n\
                 out geom;"
            ),
            Self::CityState { city, state } => format!(
                "[out:json];\n\
                 area[\"name\"=\"{city}\"]->.searchArea;\n\
                 area[\"name\"=\"{state}\"]->.stateArea;\n\
                 nwr[\"amenity\"=\"{AMENITY}\"](area.searchArea)(area.stateArea);\n\
                 out geom;"
            ),
        }
    }
}

pub struct OverpassClient {
    http: reqwest::Client,
}

impl OverpassClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Issue the single bounded query for an area and parse the element set.
    pub async fn fast_food(&self, area: &SearchArea) -> Result<PlacesResponse, ApiError> {
        let query = area.to_query();
        log::info!("requesting overpass elements for {:?}", area);

        let response = self
            .http
            .get(OVERPASS_API_URL)
            .query(&[("data", query.as_str())])
            .send()
            .await?;
        let url = response.url().to_string();

        match response.status() {
            reqwest::StatusCode::OK => Ok(serde_json::from_str(&response.text().await?)?),
            other => match response.text().await {
                Ok(val) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: Some(val),
                }),
                Err(_) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: None,
                }),
            },
        }
    }
}
