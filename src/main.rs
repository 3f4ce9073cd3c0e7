mod booking;
mod catalog;
mod client;
mod config;
mod detail;
mod model;
mod normalizer;
mod search;

use booking::BookingOutcome;
use catalog::CatalogService;
use client::{AvailabilityClient, PropertyContentClient};
use config::{BookingConfig, load_config};
use detail::BookingDetail;
use model::{ApiError, BookingError, HotelRecord};

use chrono::Utc;
use reqwest::Client;
use tracing::{error, info, warn};

const USER_AGENT: &str = "StayScout/0.1";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());

    // Load configuration from file
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let http = match Client::builder().user_agent(USER_AGENT).build() {
        Ok(c) => c,
        Err(e) => {
            error!("HTTP client init error: {}", e);
            return;
        }
    };

    // Both services share one connection pool (cloning reqwest::Client is cheap).
    let catalog = CatalogService::new(PropertyContentClient::new(
        http.clone(),
        config.content_api_base.clone(),
        config.language.clone(),
    ));
    let availability = AvailabilityClient::new(http, config.availability_api_base.clone());

    info!("Fetching {} hotels...", config.hotel_ids.len());
    let hotels = match catalog.fetch_many(&config.hotel_ids).await {
        Ok(hotels) => hotels,
        Err(e) => {
            warn!("Catalog fetch failed: {}", e);
            info!("An error occurred, please try again.");
            return;
        }
    };

    if hotels.is_empty() {
        info!("No hotels found...");
        return;
    }
    for hotel in &hotels {
        log_hotel(hotel);
    }

    if let Some(query) = &config.search_query {
        let matches = search::filter_hotels(&hotels, query);
        info!(
            "Search \"{}\": {} of {} hotels match",
            query,
            matches.len(),
            hotels.len()
        );
        if matches.is_empty() {
            info!("No hotels found...");
        }
        for hotel in &matches {
            info!("  {} ({})", hotel.name, hotel.catalog.category);
        }
    }

    if let Some(booking_cfg) = &config.booking {
        run_booking(&catalog, &availability, booking_cfg).await;
    }
}

/// Runs the availability/booking flow for one configured hotel and logs the
/// decoded booking detail when an offer comes back.
async fn run_booking(
    catalog: &CatalogService<PropertyContentClient>,
    availability: &AvailabilityClient,
    booking_cfg: &BookingConfig,
) {
    info!("Looking up hotel {} for booking...", booking_cfg.hotel_id);
    let hotel = match catalog.fetch_one(&booking_cfg.hotel_id).await {
        Ok(Some(hotel)) => hotel,
        Ok(None) => {
            info!("Hotel not found...");
            return;
        }
        Err(e) => {
            warn!("Hotel lookup failed: {}", e);
            info!("An error occurred, please try again.");
            return;
        }
    };

    info!(
        "Checking availability for {}: {} to {}, {} guest(s) x {} room(s)",
        hotel.name,
        booking_cfg.stay.checkin,
        booking_cfg.stay.checkout,
        booking_cfg.stay.guest_per_room,
        booking_cfg.stay.number_of_room
    );

    let today = Utc::now().date_naive();
    match booking::request_booking(availability, &hotel.id, &booking_cfg.stay, today).await {
        Ok(BookingOutcome::Navigate(route)) => {
            info!("Offer found, detail route: {}", route);
            let query = route.split_once('?').map(|(_, q)| q).unwrap_or("");
            log_booking_detail(&BookingDetail::from_query(query));
        }
        Ok(BookingOutcome::NoOffers) => {
            info!("No offers available.");
        }
        Err(BookingError::InvalidStay(reason)) => {
            warn!("Invalid stay parameters: {}", reason);
        }
        Err(BookingError::Api(ApiError::Status(code))) => {
            warn!("Availability returned status {}", code);
            info!("Failed to retrieve booking data.");
        }
        Err(BookingError::Api(e)) => {
            warn!("Booking error: {}", e);
            info!("An error occurred, please try again.");
        }
    }
}

fn log_hotel(hotel: &HotelRecord) {
    let cheapest = hotel
        .rooms
        .iter()
        .map(|room| room.room_price)
        .fold(f64::INFINITY, f64::min);
    info!(
        "{} | {} | {} | {:.1} stars | {} room(s) from {:.2}",
        hotel.id,
        hotel.name,
        hotel.city,
        hotel.catalog.star_rating,
        hotel.rooms.len(),
        cheapest
    );
}

fn log_booking_detail(detail: &BookingDetail) {
    info!("Booking details:");
    info!("  Property ID: {}", detail.property_id);
    info!("  Room: {}", detail.room_name);
    info!("  Price total: {}", detail.price_total);
    info!("  Nightly rate: {}", detail.rate_nightly);
    info!("  Rooms available: {}", detail.room_available);
    info!("  Beds: {}", detail.room_bed_groups);
    info!("  Size (sqm): {}", detail.room_size_sqm);
    info!("  Views: {}", detail.room_views);
    info!("  Cancel policy: {}", detail.cancel_policy_description);
    info!("  Images: {}", detail.room_images.len());
}
