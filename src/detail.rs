// Detail-route decoding: the booking detail view reads everything it shows
// back out of the query string produced by the booking bridge.
use serde::Deserialize;
use std::collections::HashMap;
use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoomImage {
    #[serde(default)]
    pub size_sm: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDetail {
    pub property_id: String,
    pub room_name: String,
    pub price_total: String,
    pub rate_nightly: String,
    pub room_available: String,
    pub room_bed_groups: String,
    pub room_size_sqm: String,
    pub room_views: String,
    pub cancel_policy_description: String,
    pub room_images: Vec<RoomImage>,
}

impl BookingDetail {
    /// Decodes a detail-route query string. Missing keys render as empty
    /// strings; malformed room_images JSON degrades to an empty list.
    pub fn from_query(query: &str) -> Self {
        let mut params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        let mut take = |key: &str| params.remove(key).unwrap_or_default();

        let room_images = serde_json::from_str(&take("room_images")).unwrap_or_default();

        BookingDetail {
            property_id: take("property_id"),
            room_name: take("room_name"),
            price_total: take("price_total"),
            rate_nightly: take("rate_nightly"),
            room_available: take("room_available"),
            room_bed_groups: take("room_bed_groups"),
            room_size_sqm: take("room_size_sqm"),
            room_views: take("room_views"),
            cancel_policy_description: take("cancel_policy_description"),
            room_images,
        }
    }
}

/// Hero-image modal on the detail view. Toggled by clicks only, independent
/// of any in-flight booking request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryState {
    #[default]
    Closed,
    Open,
}

impl GalleryState {
    pub fn toggle(self) -> Self {
        match self {
            GalleryState::Closed => GalleryState::Open,
            GalleryState::Open => GalleryState::Closed,
        }
    }
}
