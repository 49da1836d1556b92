use std::collections::HashMap;

/// Sentinel returned whenever any of the five address parts is missing.
pub const NO_ADDRESS: &str = "No street address available";

/// Compose a display address from a geodata tag bag. All five parts must be
/// present; there is no partial-address mode. The street part carries a
/// trailing comma, everything is joined with single spaces.
pub fn compose(tags: &HashMap<String, String>) -> String {
    let parts = (
        tags.get("addr:housenumber"),
        tags.get("addr:street"),
        tags.get("addr:city"),
        tags.get("addr:state"),
        tags.get("addr:postcode"),
    );
    match parts {
        (Some(housenumber), Some(street), Some(city), Some(state), Some(postcode)) => {
            format!("{housenumber} {street}, {city} {state} {postcode}")
        }
        _ => NO_ADDRESS.to_owned(),
    }
}
