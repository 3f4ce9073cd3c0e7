use crate::model::{ApiError, AvailabilityResponse, StayRequest};
use serde_json::{Map, Value};

/// Property content lookup. One call carries any number of ids and returns
/// the raw response mapping, keyed by id string.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    async fn fetch_content(&self, ids: &[String]) -> Result<Map<String, Value>, ApiError>;
}

/// Stay availability lookup for one hotel.
#[async_trait::async_trait]
pub trait AvailabilityApi: Send + Sync {
    async fn fetch_offers(
        &self,
        hotel_id: &str,
        stay: &StayRequest,
    ) -> Result<AvailabilityResponse, ApiError>;
}
