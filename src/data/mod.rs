pub mod aggregate;
pub mod loader;
pub mod model;

pub use aggregate::{top_neighborhoods, top_properties};
pub use loader::{load, LoadError};
pub use model::{Dataset, Listing};
