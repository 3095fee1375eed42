/// HTTP handlers for headshot-service
pub mod photos;
pub mod roster;
pub mod search;

pub use photos::{download_player_photo, download_team_photos};
pub use roster::get_roster;
pub use search::search_players;

use crate::error::{AppError, Result};

/// Team codes are short letter codes; anything else can never resolve and is
/// rejected before touching upstream services.
pub(crate) fn validate_team_code(team_code: &str) -> Result<()> {
    if team_code.is_empty() {
        return Err(AppError::ValidationError("Team code required".to_string()));
    }
    if team_code.len() < 2
        || team_code.len() > 4
        || !team_code.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(AppError::ValidationError(format!(
            "Invalid team code: {team_code}"
        )));
    }
    Ok(())
}

/// Player ids are numeric strings on every upstream surface.
pub(crate) fn validate_player_id(player_id: &str) -> Result<()> {
    if player_id.is_empty() {
        return Err(AppError::ValidationError("Player ID required".to_string()));
    }
    if !player_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::ValidationError(format!(
            "Invalid player ID: {player_id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_code_validation() {
        assert!(validate_team_code("DAL").is_ok());
        assert!(validate_team_code("dal").is_ok());
        assert!(validate_team_code("").is_err());
        assert!(validate_team_code("D").is_err());
        assert!(validate_team_code("DALLAS").is_err());
        assert!(validate_team_code("D4L").is_err());
    }

    #[test]
    fn player_id_validation() {
        assert!(validate_player_id("3998").is_ok());
        assert!(validate_player_id("").is_err());
        assert!(validate_player_id("39a8").is_err());
    }
}
