// Availability/booking bridge: validate the stay, ask the availability API,
// and turn the first offer into a detail-route URL.
use crate::client::AvailabilityApi;
use crate::model::{BookingError, Offer, StayRequest};

use chrono::NaiveDate;
use serde_json::Value;
use url::form_urlencoded;

pub const DETAIL_ROUTE: &str = "/BookingDetail";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Detail route carrying every field of the first offer as query
    /// parameters.
    Navigate(String),
    NoOffers,
}

/// Checks stay parameters against the rules the date pickers enforce in the
/// UI: check-in is today or later, check-out is on or after check-in, and
/// both counts are at least 1. `today` is passed in so callers control the
/// clock.
pub fn validate_stay(stay: &StayRequest, today: NaiveDate) -> Result<(), BookingError> {
    if stay.checkin < today {
        return Err(BookingError::InvalidStay(
            "check-in date is in the past".to_string(),
        ));
    }
    if stay.checkout < stay.checkin {
        return Err(BookingError::InvalidStay(
            "check-out date is before check-in".to_string(),
        ));
    }
    if stay.guest_per_room < 1 {
        return Err(BookingError::InvalidStay(
            "guest_per_room must be at least 1".to_string(),
        ));
    }
    if stay.number_of_room < 1 {
        return Err(BookingError::InvalidStay(
            "number_of_room must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// One availability lookup, no retry. Zero offers is a normal outcome; the
/// caller decides what notice to show. Transport and status failures come
/// back as errors for the call site to log and soften.
pub async fn request_booking<A: AvailabilityApi>(
    api: &A,
    hotel_id: &str,
    stay: &StayRequest,
    today: NaiveDate,
) -> Result<BookingOutcome, BookingError> {
    validate_stay(stay, today)?;

    let response = api.fetch_offers(hotel_id, stay).await?;

    let Some(offer) = response.offer_list.first() else {
        return Ok(BookingOutcome::NoOffers);
    };

    Ok(BookingOutcome::Navigate(format!(
        "{}?{}",
        DETAIL_ROUTE,
        offer_query(offer)
    )))
}

/// Flattens one offer into a URL query string. Scalars keep their plain
/// rendering; nested values (room_images) are JSON-encoded so the detail
/// route can decode them again.
pub fn offer_query(offer: &Offer) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in offer {
        serializer.append_pair(key, &query_value(value));
    }
    serializer.finish()
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        nested => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::BookingDetail;
    use crate::model::{ApiError, AvailabilityResponse};
    use serde_json::json;

    struct FakeAvailabilityApi {
        offers: Vec<Offer>,
    }

    #[async_trait::async_trait]
    impl AvailabilityApi for FakeAvailabilityApi {
        async fn fetch_offers(
            &self,
            _hotel_id: &str,
            _stay: &StayRequest,
        ) -> Result<AvailabilityResponse, ApiError> {
            Ok(AvailabilityResponse {
                offer_list: self.offers.clone(),
            })
        }
    }

    struct FailingAvailabilityApi;

    #[async_trait::async_trait]
    impl AvailabilityApi for FailingAvailabilityApi {
        async fn fetch_offers(
            &self,
            _hotel_id: &str,
            _stay: &StayRequest,
        ) -> Result<AvailabilityResponse, ApiError> {
            Err(ApiError::Status(502))
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn stay() -> StayRequest {
        StayRequest {
            checkin: date("2026-09-01"),
            checkout: date("2026-09-03"),
            guest_per_room: 2,
            number_of_room: 1,
        }
    }

    fn offer(value: serde_json::Value) -> Offer {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn rejects_past_checkin_and_inverted_dates() {
        let today = date("2026-09-02");
        assert!(matches!(
            validate_stay(&stay(), today),
            Err(BookingError::InvalidStay(_))
        ));

        let mut inverted = stay();
        inverted.checkout = date("2026-08-30");
        assert!(matches!(
            validate_stay(&inverted, date("2026-08-01")),
            Err(BookingError::InvalidStay(_))
        ));
    }

    #[test]
    fn rejects_zero_guests_or_rooms() {
        let today = date("2026-08-01");

        let mut no_guests = stay();
        no_guests.guest_per_room = 0;
        assert!(validate_stay(&no_guests, today).is_err());

        let mut no_rooms = stay();
        no_rooms.number_of_room = 0;
        assert!(validate_stay(&no_rooms, today).is_err());
    }

    #[test]
    fn same_day_checkin_and_checkout_are_allowed() {
        let today = date("2026-09-01");
        let mut same_day = stay();
        same_day.checkout = same_day.checkin;
        assert!(validate_stay(&same_day, today).is_ok());
    }

    #[tokio::test]
    async fn zero_offers_means_no_navigation() {
        let api = FakeAvailabilityApi { offers: vec![] };
        let outcome = request_booking(&api, "123", &stay(), date("2026-08-01"))
            .await
            .unwrap();
        assert_eq!(outcome, BookingOutcome::NoOffers);
    }

    #[tokio::test]
    async fn first_offer_round_trips_through_the_query_string() {
        let api = FakeAvailabilityApi {
            offers: vec![
                offer(json!({ "property_id": "123", "room_name": "Deluxe" })),
                offer(json!({ "property_id": "999", "room_name": "Ignored" })),
            ],
        };

        let outcome = request_booking(&api, "123", &stay(), date("2026-08-01"))
            .await
            .unwrap();
        let BookingOutcome::Navigate(route) = outcome else {
            panic!("expected navigation");
        };

        let (path, query) = route.split_once('?').unwrap();
        assert_eq!(path, DETAIL_ROUTE);

        let detail = BookingDetail::from_query(query);
        assert_eq!(detail.property_id, "123");
        assert_eq!(detail.room_name, "Deluxe");
    }

    #[tokio::test]
    async fn nested_room_images_survive_the_round_trip() {
        let api = FakeAvailabilityApi {
            offers: vec![offer(json!({
                "property_id": "123",
                "price_total": 410.5,
                "room_images": [
                    { "size_sm": "https://img.example.com/s.jpg", "caption": "Bedroom" }
                ]
            }))],
        };

        let outcome = request_booking(&api, "123", &stay(), date("2026-08-01"))
            .await
            .unwrap();
        let BookingOutcome::Navigate(route) = outcome else {
            panic!("expected navigation");
        };

        let query = route.split_once('?').unwrap().1;
        let detail = BookingDetail::from_query(query);
        assert_eq!(detail.price_total, "410.5");
        assert_eq!(detail.room_images.len(), 1);
        assert_eq!(detail.room_images[0].caption, "Bedroom");
    }

    #[tokio::test]
    async fn api_failure_propagates_as_booking_error() {
        let result = request_booking(&FailingAvailabilityApi, "123", &stay(), date("2026-08-01")).await;
        assert!(matches!(
            result,
            Err(BookingError::Api(ApiError::Status(502)))
        ));
    }

    #[tokio::test]
    async fn invalid_stay_never_reaches_the_api() {
        struct PanickingApi;

        #[async_trait::async_trait]
        impl AvailabilityApi for PanickingApi {
            async fn fetch_offers(
                &self,
                _hotel_id: &str,
                _stay: &StayRequest,
            ) -> Result<AvailabilityResponse, ApiError> {
                panic!("availability must not be queried for an invalid stay");
            }
        }

        let result = request_booking(&PanickingApi, "123", &stay(), date("2026-12-01")).await;
        assert!(matches!(result, Err(BookingError::InvalidStay(_))));
    }
}
