use std::error;
use std::fmt;

pub mod pipeline;
pub mod state;

pub use pipeline::{Pipeline, RestaurantSource};
pub use state::ScreenState;

/// Failure of the fetch as a whole. Per-record enrichment failures never
/// surface here; only the geodata query itself can fail a fetch.
#[derive(Debug, Clone)]
pub enum FetchError {
    Geodata(overpass::ApiError),
}

impl error::Error for FetchError {}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Geodata(why) => write!(f, "geodata query failed: {}", why),
        }
    }
}

impl From<overpass::ApiError> for FetchError {
    fn from(why: overpass::ApiError) -> Self {
        FetchError::Geodata(why)
    }
}

pub type FetchResult<O> = Result<O, FetchError>;
