use model::restaurant::Restaurant;
use overpass::client::SearchArea;

use crate::pipeline::RestaurantSource;

/// Screen-facing state for one search session. The presentation layer owns
/// a value of this type, writes the search fields, and calls `fetch` on
/// user intent; everything else is read-only from the outside.
#[derive(Debug, Default)]
pub struct ScreenState {
    restaurants: Vec<Restaurant>,
    loading: bool,
    cursor: usize,
    pub city: String,
    pub state: String,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Area the next fetch runs against: the city/state fields when both
    /// are filled in, the fixed default area otherwise.
    pub fn search_area(&self) -> SearchArea {
        let city = self.city.trim();
        let state = self.state.trim();
        if !city.is_empty() && !state.is_empty() {
            SearchArea::CityState {
                city: city.to_owned(),
                state: state.to_owned(),
            }
        } else {
            SearchArea::default_area()
        }
    }

    /// Run one fetch and replace the whole record list with its outcome.
    /// A trigger while a fetch is already in flight is ignored. A failed
    /// query leaves the list empty; the caller only ever observes records
    /// or the absence of records, never the error itself.
    pub async fn fetch<S: RestaurantSource>(&mut self, source: &S) {
        if self.loading {
            log::debug!("fetch already in flight, ignoring trigger");
            return;
        }
        self.loading = true;

        match source.fetch(&self.search_area()).await {
            Ok(records) => {
                self.restaurants = records;
            }
            Err(why) => {
                log::warn!("restaurant fetch failed: {}", why);
                self.restaurants.clear();
            }
        }

        self.cursor = 0;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Record currently shown, if the list is non-empty.
    pub fn current(&self) -> Option<&Restaurant> {
        self.restaurants.get(self.cursor)
    }

    /// Move to the next record, clamped to the end of the list.
    pub fn advance(&mut self) {
        if self.cursor + 1 < self.restaurants.len() {
            self.cursor += 1;
        }
    }

    /// Move to the previous record, clamped to the start of the list.
    pub fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
