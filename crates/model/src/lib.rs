pub use serde_with;

pub mod address;
pub mod maps;
pub mod restaurant;
