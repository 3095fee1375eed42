//! ZIP packaging for processed thumbnails
//!
//! Builds the whole archive in memory after fetch/transform work completes;
//! roster-sized photo sets stay small enough that streaming is not worth the
//! complexity.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::batch::PhotoEntry;
use crate::error::{AppError, Result};

/// Deflate level balancing CPU time against output size
const COMPRESSION_LEVEL: i32 = 6;

/// Replace whitespace runs with single underscores.
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Folder name inside the archive for a team's photo set.
pub fn archive_folder(team_name: &str) -> String {
    format!("{}_Photos", sanitize_name(team_name))
}

/// Pack the named entries into a single ZIP under `folder`.
pub fn build_archive(folder: &str, entries: &[PhotoEntry]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    writer
        .add_directory(format!("{folder}/"), options)
        .map_err(|e| AppError::Internal(format!("Failed to create archive folder: {e}")))?;

    for entry in entries {
        writer
            .start_file(format!("{}/{}", folder, entry.file_name), options)
            .map_err(|e| AppError::Internal(format!("Failed to start archive entry: {e}")))?;
        writer
            .write_all(&entry.data)
            .map_err(|e| AppError::Internal(format!("Failed to write archive entry: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| AppError::Internal(format!("Failed to finalize archive: {e}")))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use zip::ZipArchive;

    #[test]
    fn sanitize_replaces_whitespace_runs() {
        assert_eq!(sanitize_name("Jamie Benn"), "Jamie_Benn");
        assert_eq!(sanitize_name("A  B\tC"), "A_B_C");
        assert_eq!(sanitize_name("Solo"), "Solo");
    }

    #[test]
    fn archive_folder_carries_suffix() {
        assert_eq!(archive_folder("Dallas Stars"), "Dallas_Stars_Photos");
    }

    #[test]
    fn entries_land_inside_the_team_folder() {
        let entries = vec![
            PhotoEntry {
                file_name: "A_B.png".to_string(),
                data: Bytes::from_static(b"png-a"),
            },
            PhotoEntry {
                file_name: "C_D.png".to_string(),
                data: Bytes::from_static(b"png-c"),
            },
        ];

        let bytes = build_archive("Dallas_Stars_Photos", &entries).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        // folder entry + two files
        assert_eq!(archive.len(), 3);
        assert!(archive.by_name("Dallas_Stars_Photos/A_B.png").is_ok());
        assert!(archive.by_name("Dallas_Stars_Photos/C_D.png").is_ok());
    }

    #[test]
    fn archive_round_trips_entry_bytes() {
        use std::io::Read;

        let entries = vec![PhotoEntry {
            file_name: "A_B.png".to_string(),
            data: Bytes::from_static(b"some png bytes"),
        }];

        let bytes = build_archive("Team_Photos", &entries).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut file = archive.by_name("Team_Photos/A_B.png").unwrap();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"some png bytes");
    }

    #[test]
    fn empty_entry_list_still_builds() {
        let bytes = build_archive("Team_Photos", &[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
    }
}
