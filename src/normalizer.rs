// Boundary parse of raw property-content JSON into HotelRecord.
// All defaulting happens here so the rest of the pipeline can assume a
// fully-populated record.
use crate::model::{Catalog, HotelRecord, Room};
use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Raw record as the content API returns it. Every field is optional; the
/// single-id and multi-id response shapes both deserialize into this.
#[derive(Debug, Default, Deserialize)]
pub struct RawHotel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub address_line: Option<String>,
    pub catalog: Option<RawCatalog>,
    pub rooms: Option<Vec<RawRoom>>,
    #[serde(rename = "swimmingPool")]
    pub swimming_pool: Option<bool>,
    pub gym: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCatalog {
    pub city: Option<String>,
    pub brand: Option<String>,
    pub chain: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub star_rating: Option<f64>,
    pub review_count: Option<u64>,
    pub review_rating: Option<f64>,
    pub hero_image_url: Option<RawHeroImage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawHeroImage {
    pub lg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRoom {
    #[serde(rename = "roomPrice")]
    pub room_price: Option<f64>,
}

/// Pure transform from one raw content record to a HotelRecord. Missing
/// optional fields never fail; a record that does not even deserialize is
/// treated as all-absent and comes back fully defaulted under the requested
/// id.
pub fn normalize(requested_id: &str, raw: Value) -> HotelRecord {
    let raw: RawHotel = serde_json::from_value(raw).unwrap_or_default();

    let catalog = normalize_catalog(raw.catalog.unwrap_or_default());

    let mut rooms: Vec<Room> = raw
        .rooms
        .unwrap_or_default()
        .into_iter()
        .map(|room| Room {
            room_price: room.room_price.unwrap_or(0.0),
        })
        .collect();
    if rooms.is_empty() {
        // Placeholder keeps the invariant that every hotel has at least one room.
        rooms.push(Room { room_price: 0.0 });
    }

    HotelRecord {
        id: raw.id.unwrap_or_else(|| requested_id.to_string()),
        name: raw.name.unwrap_or_default(),
        country_code: raw.country_code.unwrap_or_default(),
        address_line: raw.address_line.unwrap_or_default(),
        city: catalog.city.clone(),
        catalog,
        rooms,
        swimming_pool: raw.swimming_pool.unwrap_or(false),
        gym: raw.gym.unwrap_or(false),
    }
}

fn normalize_catalog(raw: RawCatalog) -> Catalog {
    Catalog {
        city: raw.city.unwrap_or_default(),
        brand: or_unknown_brand(raw.brand),
        chain: or_unknown_brand(raw.chain),
        phone: raw.phone.unwrap_or_default(),
        category: raw.category.unwrap_or_default(),
        star_rating: raw.star_rating.unwrap_or(0.0),
        review_count: raw.review_count,
        review_rating: raw.review_rating,
        hero_image_url: raw.hero_image_url.and_then(|img| img.lg).unwrap_or_default(),
    }
}

// The upstream feed sends "" for unbranded properties, treat it like absence.
fn or_unknown_brand(value: Option<String>) -> String {
    match value {
        Some(brand) if !brand.is_empty() => brand,
        _ => UNKNOWN_BRAND.to_string(),
    }
}
