use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    AutoMatchRequest, AutoMatchResponse, ErrorResponse, HealthResponse, RankBuyersRequest,
    RankPropertiesRequest, RankedBuyersResponse, RankedPropertiesResponse,
};
use crate::core::{MatchError, Matcher};

/// Application state shared across all handlers
///
/// Holds no records: every request carries its own snapshot.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/auto", web::post().to(auto_match))
        .route("/matches/property", web::post().to(rank_buyers))
        .route("/matches/buyer", web::post().to(rank_properties));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn match_error_response(err: &MatchError) -> HttpResponse {
    match err {
        MatchError::EmptyInput(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Nothing to match".to_string(),
            message: err.to_string(),
            status_code: 400,
        }),
        MatchError::TooManyCandidates { .. } => HttpResponse::PayloadTooLarge().json(ErrorResponse {
            error: "Too many candidates".to_string(),
            message: err.to_string(),
            status_code: 413,
        }),
    }
}

/// Auto-match endpoint
///
/// POST /api/v1/matches/auto
///
/// Request body:
/// ```json
/// {
///   "properties": [{ "name": "string", "price": 100, "tags": ["string"] }],
///   "buyers": [{ "name": "string", "budget": 150, "tags": ["string"] }]
/// }
/// ```
async fn auto_match(
    state: web::Data<AppState>,
    req: web::Json<AutoMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for auto_match request: {}", errors);
        return validation_failed(errors);
    }

    let AutoMatchRequest { properties, buyers } = req.into_inner();
    let run_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        "Auto-match run {}: {} properties, {} buyers",
        run_id,
        properties.len(),
        buyers.len()
    );

    match state.matcher.auto_match(properties, buyers) {
        Ok(outcome) => {
            tracing::info!("Auto-match run {} finished: {}", run_id, outcome.message);

            HttpResponse::Ok().json(AutoMatchResponse {
                run_id,
                total_matches: outcome.matches.len(),
                matches: outcome.matches,
                message: outcome.message,
            })
        }
        Err(e) => {
            tracing::warn!("Auto-match run {} rejected: {}", run_id, e);
            match_error_response(&e)
        }
    }
}

/// Rank buyers for one property
///
/// POST /api/v1/matches/property
///
/// Request body:
/// ```json
/// {
///   "property": { "name": "string", "price": 100, "tags": ["string"] },
///   "buyers": [{ "name": "string", "budget": 150, "tags": ["string"] }]
/// }
/// ```
async fn rank_buyers(
    state: web::Data<AppState>,
    req: web::Json<RankBuyersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for rank_buyers request: {}", errors);
        return validation_failed(errors);
    }

    let RankBuyersRequest { property, buyers } = req.into_inner();

    tracing::info!(
        "Ranking {} buyers for property {}",
        buyers.len(),
        property.name
    );

    match state.matcher.rank_buyers_for_property(&property, buyers) {
        Ok(ranked) => {
            let buyers: Vec<_> = ranked.collect();
            HttpResponse::Ok().json(RankedBuyersResponse { property, buyers })
        }
        Err(e) => {
            tracing::warn!("Ranking buyers for {} rejected: {}", property.name, e);
            match_error_response(&e)
        }
    }
}

/// Rank properties for one buyer
///
/// POST /api/v1/matches/buyer
///
/// Request body:
/// ```json
/// {
///   "buyer": { "name": "string", "budget": 150, "tags": ["string"] },
///   "properties": [{ "name": "string", "price": 100, "tags": ["string"] }]
/// }
/// ```
async fn rank_properties(
    state: web::Data<AppState>,
    req: web::Json<RankPropertiesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for rank_properties request: {}", errors);
        return validation_failed(errors);
    }

    let RankPropertiesRequest { buyer, properties } = req.into_inner();

    tracing::info!(
        "Ranking {} properties for buyer {}",
        properties.len(),
        buyer.name
    );

    match state.matcher.rank_properties_for_buyer(&buyer, properties) {
        Ok(ranked) => {
            let properties: Vec<_> = ranked.collect();
            HttpResponse::Ok().json(RankedPropertiesResponse { buyer, properties })
        }
        Err(e) => {
            tracing::warn!("Ranking properties for {} rejected: {}", buyer.name, e);
            match_error_response(&e)
        }
    }
}
