/// Player search handler
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::SearchResponse;
use crate::services::RosterClient;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search players by name across the league
pub async fn search_players(
    roster_client: web::Data<RosterClient>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let q = query.q.trim();
    if q.len() < 2 {
        return Err(AppError::ValidationError("Query too short".to_string()));
    }

    let results = roster_client.search_players(q).await?;

    Ok(HttpResponse::Ok().json(SearchResponse { results }))
}
