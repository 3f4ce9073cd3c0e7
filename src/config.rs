use crate::model::StayRequest;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct BookingConfig {
    pub hotel_id: String,
    #[serde(flatten)]
    pub stay: StayRequest,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub content_api_base: String,
    pub availability_api_base: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub hotel_ids: Vec<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub booking: Option<BookingConfig>,
}

fn default_language() -> String {
    "en-us".to_string()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
