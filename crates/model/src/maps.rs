use utility::url::encode_component;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search";

/// Fixed zoom level embedded in every generated link.
const ZOOM: &str = "17z";

/// Deep link to a map search for a named place at the given coordinates.
/// Pure and total: the empty name and zero coordinates still produce a
/// syntactically valid link.
pub fn search_link(name: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{MAPS_SEARCH_URL}/{}/@{latitude},{longitude},{ZOOM}",
        encode_component(name)
    )
}
