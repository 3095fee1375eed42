//! Batch orchestration for roster photo sets
//!
//! Fans the roster out over a bounded pool, isolates each player's failures,
//! and reassembles results in roster order so the outcome is deterministic
//! and failures stay attributable.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::archive::sanitize_name;
use crate::error::{AppError, Result};
use crate::models::Player;

/// Produces the finished thumbnail for a single player
#[async_trait]
pub trait PlayerPhotoSource: Send + Sync {
    async fn player_photo(&self, team_code: &str, player_id: &str) -> Result<Bytes>;
}

/// One successfully processed roster photo
#[derive(Debug, Clone)]
pub struct PhotoEntry {
    pub file_name: String,
    pub data: Bytes,
}

/// One player the pipeline could not produce a photo for
#[derive(Debug, Clone)]
pub struct PhotoFailure {
    pub player: Player,
    pub reason: String,
}

/// Outcome of a roster batch: both lists follow roster order
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub successes: Vec<PhotoEntry>,
    pub failures: Vec<PhotoFailure>,
}

/// Fetch and process every roster photo with bounded concurrency.
///
/// A single player's failure never aborts the batch; failed players are
/// recorded and processing continues. The batch itself fails only when not
/// one player produced a usable thumbnail.
pub async fn run_batch<S>(
    source: &S,
    team_code: &str,
    roster: &[Player],
    concurrency: usize,
) -> Result<BatchOutcome>
where
    S: PlayerPhotoSource + ?Sized,
{
    let total = roster.len();
    let done = AtomicUsize::new(0);

    info!(team_code = %team_code, players = total, "Starting roster photo batch");

    let mut results: Vec<(usize, Player, Result<Bytes>)> =
        stream::iter(roster.iter().cloned().enumerate())
            .map(|(index, player)| {
                let done = &done;
                async move {
                    let outcome = source.player_photo(team_code, &player.id).await;
                    let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                    info!(
                        team_code = %team_code,
                        player = %player.name,
                        done = finished,
                        total = total,
                        "Processed roster entry"
                    );
                    (index, player, outcome)
                }
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

    // Archive entries are a mapping, not an ordered log, but reassembling in
    // roster order keeps the outcome deterministic under concurrency.
    results.sort_by_key(|(index, _, _)| *index);

    let mut outcome = BatchOutcome::default();
    let mut used_names: HashSet<String> = HashSet::new();

    for (_, player, result) in results {
        match result {
            Ok(data) => {
                let file_name = entry_file_name(&player, &mut used_names);
                outcome.successes.push(PhotoEntry { file_name, data });
            }
            Err(e) => {
                warn!(
                    team_code = %team_code,
                    player_id = %player.id,
                    player = %player.name,
                    error = %e,
                    "Roster photo failed"
                );
                outcome.failures.push(PhotoFailure {
                    player,
                    reason: e.to_string(),
                });
            }
        }
    }

    if outcome.successes.is_empty() {
        return Err(AppError::AllFailed(format!(
            "Failed to download any images for {team_code}"
        )));
    }

    info!(
        team_code = %team_code,
        succeeded = outcome.successes.len(),
        failed = outcome.failures.len(),
        "Roster photo batch finished"
    );

    Ok(outcome)
}

/// Sanitized unique file name for a player's thumbnail.
///
/// Two players can sanitize to the same name; the player id disambiguates
/// instead of silently overwriting the earlier entry.
fn entry_file_name(player: &Player, used: &mut HashSet<String>) -> String {
    let stem = sanitize_name(&player.name);
    let mut file_name = format!("{stem}.png");
    if !used.insert(file_name.clone()) {
        file_name = format!("{stem}_{}.png", player.id);
        used.insert(file_name.clone());
    }
    file_name
}
