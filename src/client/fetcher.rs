use crate::client::traits::{AvailabilityApi, ContentApi};
use crate::model::{ApiError, AvailabilityResponse, StayRequest};

use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

pub struct PropertyContentClient {
    client: Client,
    base_url: String,
    language: String,
}

impl PropertyContentClient {
    pub fn new(client: Client, base_url: String, language: String) -> Self {
        Self {
            client,
            base_url,
            language,
        }
    }

    fn build_url(&self, ids: &[String]) -> Result<Url, ApiError> {
        let endpoint = format!("{}/property/content", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        {
            // The API expects the id parameter repeated, not a comma list.
            let mut pairs = url.query_pairs_mut();
            for id in ids {
                pairs.append_pair("id", id);
            }
            pairs.append_pair("language", &self.language);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ContentApi for PropertyContentClient {
    async fn fetch_content(&self, ids: &[String]) -> Result<Map<String, Value>, ApiError> {
        let url = self.build_url(ids)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        match body {
            Value::Object(map) => Ok(map),
            _ => Err(ApiError::InvalidResponse(
                "expected an object keyed by hotel id".to_string(),
            )),
        }
    }
}

pub struct AvailabilityClient {
    client: Client,
    base_url: String,
}

impl AvailabilityClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn build_url(&self, hotel_id: &str) -> Result<Url, ApiError> {
        let endpoint = format!(
            "{}/stay/availability/{}",
            self.base_url.trim_end_matches('/'),
            hotel_id
        );
        Url::parse(&endpoint).map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AvailabilityApi for AvailabilityClient {
    async fn fetch_offers(
        &self,
        hotel_id: &str,
        stay: &StayRequest,
    ) -> Result<AvailabilityResponse, ApiError> {
        let url = self.build_url(hotel_id)?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("checkin", stay.checkin.to_string()),
                ("checkout", stay.checkout.to_string()),
                ("guest_per_room", stay.guest_per_room.to_string()),
                ("number_of_room", stay.number_of_room.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<AvailabilityResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}
