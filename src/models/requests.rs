use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Buyer, Property};

/// Request to auto-match the caller's current snapshot of records
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AutoMatchRequest {
    #[validate(nested)]
    #[serde(default)]
    pub properties: Vec<Property>,
    #[validate(nested)]
    #[serde(default)]
    pub buyers: Vec<Buyer>,
}

/// Request to rank buyers against a single property
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankBuyersRequest {
    #[validate(nested)]
    pub property: Property,
    #[validate(nested)]
    #[serde(default)]
    pub buyers: Vec<Buyer>,
}

/// Request to rank properties against a single buyer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankPropertiesRequest {
    #[validate(nested)]
    pub buyer: Buyer,
    #[validate(nested)]
    #[serde(default)]
    pub properties: Vec<Property>,
}
