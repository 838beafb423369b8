// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Buyer, Match, MatchingLimits, Property, Tag, TagSet};
pub use requests::{AutoMatchRequest, RankBuyersRequest, RankPropertiesRequest};
pub use responses::{
    AutoMatchResponse, ErrorResponse, HealthResponse, RankedBuyersResponse,
    RankedPropertiesResponse,
};
