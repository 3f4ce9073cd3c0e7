// Client module: thin HTTP adapters for the two external travel APIs.

pub mod fetcher;
pub mod traits;

pub use fetcher::{AvailabilityClient, PropertyContentClient};
pub use traits::{AvailabilityApi, ContentApi};
