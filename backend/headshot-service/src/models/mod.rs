/// Data models for headshot-service
///
/// This module defines structures for:
/// - Player: a roster entry with id, display name, and position
/// - TeamRosterResponse: the roster lookup payload
/// - PlayerSearchResult: one hit from the league-wide player search
use serde::{Deserialize, Serialize};

// ========================================
// Roster Models
// ========================================

/// Player position group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    F,
    D,
    G,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F => "F",
            Self::D => "D",
            Self::G => "G",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "F" => Some(Self::F),
            "D" => Some(Self::D),
            "G" => Some(Self::G),
            _ => None,
        }
    }
}

/// One player on a team roster
///
/// Identity is the id; the name is display data and may collide between
/// players after sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Roster lookup response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRosterResponse {
    pub team_code: String,
    pub team_name: String,
    pub roster: Vec<Player>,
    pub total_players: usize,
}

// ========================================
// Search Models
// ========================================

/// One hit from the league-wide player search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchResult {
    pub id: String,
    pub name: String,
    pub team_code: String,
    pub team_name: String,
    pub position: String,
}

/// Player search response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<PlayerSearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips() {
        for (pos, s) in [(Position::F, "F"), (Position::D, "D"), (Position::G, "G")] {
            assert_eq!(pos.as_str(), s);
            assert_eq!(Position::from_str(s), Some(pos));
        }
        assert_eq!(Position::from_str("C"), None);
    }

    #[test]
    fn player_serializes_camel_case_and_skips_missing_position() {
        let player = Player {
            id: "3998".to_string(),
            name: "Jamie Benn".to_string(),
            position: None,
        };

        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], "3998");
        assert_eq!(json["name"], "Jamie Benn");
        assert!(json.get("position").is_none());
    }
}
