// Catalog aggregation: fetch one or many hotels and normalize each record.
use crate::client::ContentApi;
use crate::model::{ApiError, HotelRecord};
use crate::normalizer;

use tracing::warn;

pub struct CatalogService<C> {
    api: C,
}

impl<C: ContentApi> CatalogService<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }

    /// Single lookup. `Ok(None)` when the response has no entry for the id;
    /// not-found is a value here, not an error.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<HotelRecord>, ApiError> {
        let ids = [id.to_string()];
        let mut payload = self.api.fetch_content(&ids).await?;
        Ok(payload
            .remove(id)
            .map(|raw| normalizer::normalize(id, raw)))
    }

    /// Batch lookup: one request carrying every id. Output follows the input
    /// id order regardless of how the response map is keyed. Ids the API did
    /// not resolve are skipped with a warning instead of producing a
    /// half-empty record.
    pub async fn fetch_many(&self, ids: &[String]) -> Result<Vec<HotelRecord>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut payload = self.api.fetch_content(ids).await?;

        let mut hotels = Vec::with_capacity(ids.len());
        for id in ids {
            match payload.remove(id.as_str()) {
                Some(raw) => hotels.push(normalizer::normalize(id, raw)),
                None => warn!("Hotel {} missing from content response, skipping", id),
            }
        }
        Ok(hotels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    struct FakeContentApi {
        payload: Map<String, Value>,
    }

    #[async_trait::async_trait]
    impl ContentApi for FakeContentApi {
        async fn fetch_content(&self, _ids: &[String]) -> Result<Map<String, Value>, ApiError> {
            Ok(self.payload.clone())
        }
    }

    fn payload_for(ids: &[&str]) -> Map<String, Value> {
        let mut map = Map::new();
        for id in ids {
            map.insert(
                id.to_string(),
                json!({ "id": id, "name": format!("Hotel {id}") }),
            );
        }
        map
    }

    #[tokio::test]
    async fn batch_preserves_requested_order() {
        // serde_json's map iterates in key order, so "c" before "a" exercises
        // the reordering.
        let api = FakeContentApi {
            payload: payload_for(&["a", "b", "c"]),
        };
        let service = CatalogService::new(api);

        let ids = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let hotels = service.fetch_many(&ids).await.unwrap();

        let got: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(got, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn unresolved_ids_are_skipped() {
        let api = FakeContentApi {
            payload: payload_for(&["a", "c"]),
        };
        let service = CatalogService::new(api);

        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let hotels = service.fetch_many(&ids).await.unwrap();

        let got: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(got, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn fetch_one_not_found_is_none() {
        let api = FakeContentApi {
            payload: Map::new(),
        };
        let service = CatalogService::new(api);

        assert!(service.fetch_one("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fetch_one_normalizes_the_record() {
        let api = FakeContentApi {
            payload: payload_for(&["a"]),
        };
        let service = CatalogService::new(api);

        let hotel = service.fetch_one("a").await.unwrap().unwrap();
        assert_eq!(hotel.name, "Hotel a");
        assert_eq!(hotel.catalog.brand, normalizer::UNKNOWN_BRAND);
    }

    #[tokio::test]
    async fn empty_id_list_skips_the_network() {
        struct PanickingApi;

        #[async_trait::async_trait]
        impl ContentApi for PanickingApi {
            async fn fetch_content(
                &self,
                _ids: &[String],
            ) -> Result<Map<String, Value>, ApiError> {
                panic!("should not be called for an empty id list");
            }
        }

        let service = CatalogService::new(PanickingApi);
        assert!(service.fetch_many(&[]).await.unwrap().is_empty());
    }
}
