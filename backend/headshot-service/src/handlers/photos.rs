/// Photo handlers - single headshots and whole-roster archives
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::photos::{self, HeadshotPipeline, PlayerPhotoSource};
use crate::services::RosterClient;

fn attachment(file_name: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(file_name.to_string())],
    }
}

/// Download one player's processed headshot as PNG
pub async fn download_player_photo(
    pipeline: web::Data<HeadshotPipeline>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (team_code, player_id) = path.into_inner();
    super::validate_team_code(&team_code)?;
    super::validate_player_id(&player_id)?;

    let photo = pipeline.player_photo(&team_code, &player_id).await?;

    Ok(HttpResponse::Ok()
        .content_type("image/png")
        .insert_header(attachment("player.png"))
        .body(photo))
}

/// Download a team's full roster of headshots as a ZIP archive
///
/// Partial success still returns the archive; only a batch with zero usable
/// thumbnails fails the request.
pub async fn download_team_photos(
    config: web::Data<Config>,
    roster_client: web::Data<RosterClient>,
    pipeline: web::Data<HeadshotPipeline>,
    team_code: web::Path<String>,
) -> Result<HttpResponse> {
    super::validate_team_code(&team_code)?;

    let roster = roster_client.team_roster(&team_code).await?;
    if roster.players.is_empty() {
        return Err(AppError::NotFound("No players found".to_string()));
    }

    let outcome = photos::run_batch(
        pipeline.get_ref(),
        &roster.team_code,
        &roster.players,
        config.fetch.concurrency,
    )
    .await?;

    let succeeded = outcome.successes.len();
    let failed = outcome.failures.len();

    let folder = photos::archive_folder(&roster.team_name);
    let archive = {
        let folder = folder.clone();
        let entries = outcome.successes;
        tokio::task::spawn_blocking(move || photos::build_archive(&folder, &entries))
            .await
            .map_err(|e| AppError::Internal(format!("Archive task panicked: {e}")))??
    };

    info!(
        team_code = %roster.team_code,
        succeeded = succeeded,
        failed = failed,
        archive_bytes = archive.len(),
        "Roster archive built"
    );

    Ok(HttpResponse::Ok()
        .content_type("application/zip")
        .insert_header(attachment(&format!("{folder}.zip")))
        .body(archive))
}
