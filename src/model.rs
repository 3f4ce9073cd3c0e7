// Core structs: HotelRecord, Catalog, StayRequest, error enums
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One hotel after normalization. Every field is populated: the normalizer
/// substitutes defaults for anything the content API left out, so downstream
/// code never has to re-check optionals.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub country_code: String,
    pub address_line: String,
    pub city: String,
    pub catalog: Catalog,
    pub rooms: Vec<Room>,
    pub swimming_pool: bool,
    pub gym: bool,
}

/// Brand/chain/category metadata block of a hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub city: String,
    pub brand: String,
    pub chain: String,
    pub phone: String,
    pub category: String,
    pub star_rating: f64,
    pub review_count: Option<u64>,
    pub review_rating: Option<f64>,
    pub hero_image_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub room_price: f64,
}

/// Stay parameters for an availability lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct StayRequest {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guest_per_room: u32,
    pub number_of_room: u32,
}

/// One bookable price/availability combination. The availability endpoint
/// returns flat objects with no fixed schema, so offers stay as raw JSON maps
/// until they are flattened into the detail-route query string.
pub type Offer = serde_json::Map<String, Value>;

#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub offer_list: Vec<Offer>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("invalid stay parameters: {0}")]
    InvalidStay(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}
