//! Candidate image locations
//!
//! The image host keeps one folder per season. The resolver produces every
//! candidate URL for a player, newest season first; fetching decides which
//! one actually exists.

/// Season folders on the image host, newest first
const SEASON_TAGS: [&str; 3] = ["20252026", "20242025", "20232024"];

/// Build the ordered candidate headshot URLs for one player.
///
/// Pure function. Malformed team codes are not rejected here; they produce
/// URLs that fail to fetch and surface as a fetch error downstream.
pub fn candidate_urls(base_url: &str, team_code: &str, player_id: &str) -> Vec<String> {
    SEASON_TAGS
        .iter()
        .map(|season| {
            format!(
                "{}/{}/{}/{}.png",
                base_url,
                season,
                team_code.to_uppercase(),
                player_id
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_candidate_per_season_newest_first() {
        let urls = candidate_urls("https://images.example/mugs", "dal", "3998");

        assert_eq!(urls.len(), SEASON_TAGS.len());
        assert_eq!(urls[0], "https://images.example/mugs/20252026/DAL/3998.png");
        assert_eq!(urls[1], "https://images.example/mugs/20242025/DAL/3998.png");
        assert_eq!(urls[2], "https://images.example/mugs/20232024/DAL/3998.png");
    }

    #[test]
    fn team_code_is_upper_cased() {
        let urls = candidate_urls("http://host", "wpg", "42");
        assert!(urls.iter().all(|u| u.contains("/WPG/")));
    }

    #[test]
    fn malformed_team_code_still_resolves() {
        // Not the resolver's job to validate; the fetch will 404
        let urls = candidate_urls("http://host", "no such team", "1");
        assert_eq!(urls.len(), SEASON_TAGS.len());
        assert!(urls[0].contains("NO SUCH TEAM"));
    }
}
