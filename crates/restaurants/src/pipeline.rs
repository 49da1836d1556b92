use async_trait::async_trait;
use futures::future::join_all;
use logo_lookup::{site_token, LogoHints, LogoResolver, Platform};
use model::restaurant::{Restaurant, UNNAMED_PLACE};
use model::{address, maps};
use overpass::client::{OverpassClient, SearchArea};
use overpass::model::Element;

use crate::FetchResult;

/// Produces the finalized record list for one user-triggered search.
#[async_trait]
pub trait RestaurantSource {
    async fn fetch(&self, area: &SearchArea) -> FetchResult<Vec<Restaurant>>;
}

pub struct Pipeline {
    geodata: OverpassClient,
    logos: LogoResolver,
}

impl Pipeline {
    pub fn new(platform: Platform) -> Self {
        Self::with_parts(OverpassClient::new(), LogoResolver::new(platform))
    }

    pub fn with_parts(geodata: OverpassClient, logos: LogoResolver) -> Self {
        Self { geodata, logos }
    }

    /// Fan the per-element enrichment out concurrently and join on all of
    /// it. The fan-in keeps the order the source returned the elements in.
    async fn enrich_all(&self, elements: Vec<Element>) -> Vec<Restaurant> {
        join_all(elements.into_iter().map(|element| self.enrich(element))).await
    }

    async fn enrich(&self, element: Element) -> Restaurant {
        let hints = LogoHints {
            brand_id: element.brand_wikidata().map(str::to_owned),
            site_token: element.name().map(site_token),
        };
        let logo_url = self.logos.resolve(&hints).await;
        finalize(element, logo_url)
    }
}

/// Derive the presentation fields that need no network round trip.
fn finalize(element: Element, logo_url: Option<String>) -> Restaurant {
    let name = element.name().unwrap_or(UNNAMED_PLACE).to_owned();
    let address = address::compose(&element.tags);
    let map_link = maps::search_link(&name, element.lat, element.lon);
    Restaurant {
        id: element.id,
        name,
        address,
        latitude: element.lat,
        longitude: element.lon,
        map_link,
        logo_url,
    }
}

#[async_trait]
impl RestaurantSource for Pipeline {
    async fn fetch(&self, area: &SearchArea) -> FetchResult<Vec<Restaurant>> {
        let response = self.geodata.fast_food(area).await?;
        log::info!("enriching {} elements", response.elements.len());
        Ok(self.enrich_all(response.elements).await)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use logo_lookup::{LogoProvider, LookupError, Strategy};
    use model::address::NO_ADDRESS;

    use super::*;

    fn elements(payload: &str) -> Vec<Element> {
        serde_json::from_str(payload).unwrap()
    }

    fn offline_pipeline() -> Pipeline {
        Pipeline::with_parts(
            OverpassClient::new(),
            LogoResolver::with_providers(Platform::Ios, vec![]),
        )
    }

    /// Answers from the hint alone, standing in for both network services.
    struct TokenEchoProvider;

    #[async_trait]
    impl LogoProvider for TokenEchoProvider {
        fn strategy(&self) -> Strategy {
            Strategy::DomainGuess
        }

        async fn lookup(&self, hints: &LogoHints) -> Result<Option<String>, LookupError> {
            Ok(hints
                .site_token
                .as_ref()
                .map(|token| format!("https://logos.test/{token}.png")))
        }
    }

    #[tokio::test]
    async fn bare_element_gets_sentinels_and_a_map_link() {
        let records = offline_pipeline()
            .enrich_all(elements(
                r#"[ { "id": 1, "lat": 43.8, "lon": -111.8,
                       "tags": { "name": "Burger Co" } } ]"#,
            ))
            .await;

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Burger Co");
        assert_eq!(record.address, NO_ADDRESS);
        assert!(record.map_link.contains("Burger%20Co"));
        assert!(record.map_link.contains("43.8"));
        assert!(record.map_link.contains("-111.8"));
        assert_eq!(record.logo_url, None);
    }

    #[tokio::test]
    async fn nameless_element_gets_the_unnamed_sentinel_and_no_token() {
        let pipeline = Pipeline::with_parts(
            OverpassClient::new(),
            LogoResolver::with_providers(Platform::Ios, vec![Box::new(TokenEchoProvider)]),
        );
        let records = pipeline
            .enrich_all(elements(r#"[ { "id": 7, "lat": 43.8, "lon": -111.8 } ]"#))
            .await;

        assert_eq!(records[0].name, UNNAMED_PLACE);
        assert_eq!(records[0].logo_url, None);
    }

    #[tokio::test]
    async fn enrichment_preserves_response_order_and_length() {
        let pipeline = Pipeline::with_parts(
            OverpassClient::new(),
            LogoResolver::with_providers(Platform::Ios, vec![Box::new(TokenEchoProvider)]),
        );
        let records = pipeline
            .enrich_all(elements(
                r#"[ { "id": 2, "lat": 43.8, "lon": -111.8,
                       "tags": { "name": "Taco Stand" } },
                     { "id": 1, "lat": 43.9, "lon": -111.7,
                       "tags": { "name": "Arby's" } } ]"#,
            ))
            .await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 2);
        assert_eq!(records[1].id, 1);
        assert_eq!(
            records[0].logo_url.as_deref(),
            Some("https://logos.test/tacostand.png")
        );
        assert_eq!(
            records[1].logo_url.as_deref(),
            Some("https://logos.test/arbys.png")
        );
    }

    #[tokio::test]
    async fn full_tag_bag_composes_the_address() {
        let records = offline_pipeline()
            .enrich_all(elements(
                r#"[ { "id": 3, "lat": 43.82, "lon": -111.79,
                       "tags": { "name": "Burger Co",
                                 "addr:housenumber": "460",
                                 "addr:street": "N 2nd E",
                                 "addr:city": "Rexburg",
                                 "addr:state": "ID",
                                 "addr:postcode": "83440" } } ]"#,
            ))
            .await;

        assert_eq!(records[0].address, "460 N 2nd E, Rexburg ID 83440");
    }
}
