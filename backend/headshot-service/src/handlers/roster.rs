/// Roster handlers - team roster lookup
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::models::TeamRosterResponse;
use crate::services::RosterClient;

/// Get the current roster for a team
pub async fn get_roster(
    roster_client: web::Data<RosterClient>,
    team_code: web::Path<String>,
) -> Result<HttpResponse> {
    super::validate_team_code(&team_code)?;

    let roster = roster_client.team_roster(&team_code).await?;

    Ok(HttpResponse::Ok().json(TeamRosterResponse {
        team_code: roster.team_code,
        team_name: roster.team_name,
        total_players: roster.players.len(),
        roster: roster.players,
    }))
}
