//! Roster collaborator client
//!
//! Wraps the public roster and player-search APIs. Team codes resolve
//! through the static team table before any upstream call is made, so an
//! unknown team never costs a network round trip.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::teams;
use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};
use crate::models::{Player, PlayerSearchResult, Position};

/// Some upstreams reject requests without a browser-looking agent
const USER_AGENT: &str = "Mozilla/5.0";

/// A resolved roster: display name plus players in published order
#[derive(Debug, Clone)]
pub struct TeamRoster {
    pub team_code: String,
    pub team_name: String,
    pub players: Vec<Player>,
}

/// Client for the roster and player-search collaborators
pub struct RosterClient {
    http: Client,
    roster_base_url: String,
    search_base_url: String,
}

impl RosterClient {
    pub fn new(cfg: &UpstreamConfig, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            roster_base_url: cfg.roster_base_url.clone(),
            search_base_url: cfg.search_base_url.clone(),
        })
    }

    /// Fetch the current roster for a team code.
    ///
    /// The forwards/defensemen/goalies groups are flattened into one list,
    /// keeping the published order within each group.
    pub async fn team_roster(&self, team_code: &str) -> Result<TeamRoster> {
        let team = teams::find(team_code)
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let url = format!("{}/roster/{}/current", self.roster_base_url, team.abbrev);
        debug!(team_code = %team_code, url = %url, "Fetching roster");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Roster fetch failed: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "No roster published for {}",
                team.abbrev
            )));
        }
        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Roster fetch failed with status {}",
                response.status()
            )));
        }

        let wire: WireRoster = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse roster response: {e}")))?;

        let mut players = Vec::new();
        for (group, position) in [
            (wire.forwards, Position::F),
            (wire.defensemen, Position::D),
            (wire.goalies, Position::G),
        ] {
            for entry in group {
                players.push(Player {
                    id: entry.id.to_string(),
                    name: format!("{} {}", entry.first_name.default, entry.last_name.default),
                    position: Some(position),
                });
            }
        }

        info!(team_code = %team_code, players = players.len(), "Roster fetched");

        Ok(TeamRoster {
            team_code: team_code.to_uppercase(),
            team_name: team.name.to_string(),
            players,
        })
    }

    /// Search players by name across the league.
    pub async fn search_players(&self, query: &str) -> Result<Vec<PlayerSearchResult>> {
        let url = format!("{}/search/player", self.search_base_url);
        debug!(query = %query, "Searching players");

        let response = self
            .http
            .get(&url)
            .query(&[("culture", "en-us"), ("limit", "20"), ("q", query)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Player search failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Player search failed with status {}",
                response.status()
            )));
        }

        let hits: Vec<WireSearchHit> = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse search response: {e}")))?;

        let results = hits
            .into_iter()
            .map(|hit| {
                let team_name = hit
                    .team_abbrev
                    .as_deref()
                    .and_then(teams::find)
                    .map(|t| t.name.to_string());
                PlayerSearchResult {
                    id: hit.player_id,
                    name: hit.name,
                    team_name: team_name
                        .or_else(|| hit.team_abbrev.clone())
                        .unwrap_or_else(|| "Unknown Team".to_string()),
                    team_code: hit.team_abbrev.unwrap_or_else(|| "N/A".to_string()),
                    position: hit.position_code.unwrap_or_default(),
                }
            })
            .collect();

        Ok(results)
    }
}

// Wire formats of the upstream APIs

#[derive(Debug, Deserialize)]
struct WireRoster {
    #[serde(default)]
    forwards: Vec<WireRosterPlayer>,
    #[serde(default)]
    defensemen: Vec<WireRosterPlayer>,
    #[serde(default)]
    goalies: Vec<WireRosterPlayer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRosterPlayer {
    id: i64,
    first_name: WireLocalized,
    last_name: WireLocalized,
}

#[derive(Debug, Deserialize)]
struct WireLocalized {
    default: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSearchHit {
    player_id: String,
    name: String,
    #[serde(default)]
    team_abbrev: Option<String>,
    #[serde(default)]
    position_code: Option<String>,
}
