//! Static team table
//!
//! Read-only lookup data constructed once at startup. The lookup code and
//! the abbreviation used by the roster/image hosts differ for relocated
//! franchises, so both are kept.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One franchise entry
#[derive(Debug, Clone, Copy)]
pub struct Team {
    pub name: &'static str,
    /// Abbreviation the roster and image hosts key their folders by
    pub abbrev: &'static str,
}

static TEAMS: Lazy<HashMap<&'static str, Team>> = Lazy::new(|| {
    HashMap::from([
        ("NJD", Team { name: "New Jersey Devils", abbrev: "NJD" }),
        ("NYI", Team { name: "New York Islanders", abbrev: "NYI" }),
        ("NYR", Team { name: "New York Rangers", abbrev: "NYR" }),
        ("PHI", Team { name: "Philadelphia Flyers", abbrev: "PHI" }),
        ("PIT", Team { name: "Pittsburgh Penguins", abbrev: "PIT" }),
        ("BOS", Team { name: "Boston Bruins", abbrev: "BOS" }),
        ("BUF", Team { name: "Buffalo Sabres", abbrev: "BUF" }),
        ("MTL", Team { name: "Montreal Canadiens", abbrev: "MTL" }),
        ("OTT", Team { name: "Ottawa Senators", abbrev: "OTT" }),
        ("TOR", Team { name: "Toronto Maple Leafs", abbrev: "TOR" }),
        ("CAR", Team { name: "Carolina Hurricanes", abbrev: "CAR" }),
        ("FLA", Team { name: "Florida Panthers", abbrev: "FLA" }),
        ("TBL", Team { name: "Tampa Bay Lightning", abbrev: "TBL" }),
        ("WSH", Team { name: "Washington Capitals", abbrev: "WSH" }),
        ("CHI", Team { name: "Chicago Blackhawks", abbrev: "CHI" }),
        ("DET", Team { name: "Detroit Red Wings", abbrev: "DET" }),
        ("NSH", Team { name: "Nashville Predators", abbrev: "NSH" }),
        ("STL", Team { name: "St. Louis Blues", abbrev: "STL" }),
        ("CGY", Team { name: "Calgary Flames", abbrev: "CGY" }),
        ("COL", Team { name: "Colorado Avalanche", abbrev: "COL" }),
        ("EDM", Team { name: "Edmonton Oilers", abbrev: "EDM" }),
        ("VAN", Team { name: "Vancouver Canucks", abbrev: "VAN" }),
        ("ANA", Team { name: "Anaheim Ducks", abbrev: "ANA" }),
        ("DAL", Team { name: "Dallas Stars", abbrev: "DAL" }),
        ("LAK", Team { name: "Los Angeles Kings", abbrev: "LAK" }),
        ("SJS", Team { name: "San Jose Sharks", abbrev: "SJS" }),
        ("CBJ", Team { name: "Columbus Blue Jackets", abbrev: "CBJ" }),
        ("MIN", Team { name: "Minnesota Wild", abbrev: "MIN" }),
        ("WPG", Team { name: "Winnipeg Jets", abbrev: "WPG" }),
        // Relocated franchise keeps answering to its old code
        ("ARI", Team { name: "Utah Hockey Club", abbrev: "UTA" }),
        ("VGK", Team { name: "Vegas Golden Knights", abbrev: "VGK" }),
        ("SEA", Team { name: "Seattle Kraken", abbrev: "SEA" }),
    ])
});

/// Look up a team by code, case-insensitive.
pub fn find(code: &str) -> Option<Team> {
    TEAMS.get(code.to_uppercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let team = find("dal").expect("DAL should exist");
        assert_eq!(team.name, "Dallas Stars");
        assert_eq!(team.abbrev, "DAL");
    }

    #[test]
    fn unknown_code_returns_none() {
        assert!(find("XYZ").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn relocated_franchise_maps_to_new_abbrev() {
        let team = find("ARI").expect("ARI should exist");
        assert_eq!(team.abbrev, "UTA");
        assert_eq!(team.name, "Utah Hockey Club");
    }
}
