use serde::{Deserialize, Serialize};
use crate::models::domain::{Buyer, Match, Property};

/// Response for the auto-match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoMatchResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
    pub matches: Vec<Match>,
    pub message: String,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Buyers ranked for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedBuyersResponse {
    pub property: Property,
    pub buyers: Vec<Buyer>,
}

/// Properties ranked for one buyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPropertiesResponse {
    pub buyer: Buyer,
    pub properties: Vec<Property>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
