use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info};

use crate::io::atomic::atomic_write;
use crate::model::track::{Track, TrackSource};
use crate::ops::track_ops::sort_tracks;
use crate::parse::{MetadataError, load_metadata, parse_plan, serialize_metadata};

/// Directory under the project root holding both track roots
pub const CONDUCTOR_DIR: &str = "conductor";
pub const METADATA_FILE: &str = "metadata.json";
pub const PLAN_FILE: &str = "plan.md";

/// Error type for track file I/O
#[derive(Debug, thiserror::Error)]
pub enum TrackIoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Metadata(#[from] MetadataError),
}

/// Root directory for tracks of the given source
pub fn source_root(base: &Path, source: TrackSource) -> PathBuf {
    base.join(CONDUCTOR_DIR).join(source.dir_name())
}

/// Load one track directory: `metadata.json` is required, `plan.md` optional.
///
/// An empty `track_id` falls back to the directory name.
pub fn load_track_dir(dir: &Path, source: TrackSource) -> Result<Track, TrackIoError> {
    let meta_path = dir.join(METADATA_FILE);
    let bytes = fs::read(&meta_path).map_err(|e| TrackIoError::ReadError {
        path: meta_path.clone(),
        source: e,
    })?;
    let mut track = load_metadata(&bytes)?;

    if track.track_id.is_empty() {
        track.track_id = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    track.source = source;
    track.dir = Some(dir.to_path_buf());

    let plan_path = dir.join(PLAN_FILE);
    match fs::read(&plan_path) {
        Ok(bytes) => track.phases = parse_plan(&String::from_utf8_lossy(&bytes)),
        Err(e) => debug!(path = %plan_path.display(), error = %e, "no plan"),
    }

    Ok(track)
}

/// Scan `conductor/tracks` and `conductor/archive` for track directories.
///
/// Missing roots contribute nothing, and directories whose metadata is
/// missing or not JSON are skipped. The result is in display order.
pub fn discover_tracks(base: &Path) -> Vec<Track> {
    let mut tracks = Vec::new();

    for source in [TrackSource::Active, TrackSource::Archived] {
        let root = source_root(base, source);
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "track root unavailable");
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match load_track_dir(&path, source) {
                Ok(track) => tracks.push(track),
                Err(e) => debug!(dir = %path.display(), error = %e, "skipping track directory"),
            }
        }
    }

    sort_tracks(&mut tracks);
    debug!(count = tracks.len(), base = %base.display(), "discovered tracks");
    tracks
}

/// Path of the metadata file a track should be saved to
pub fn metadata_path(base: &Path, track: &Track) -> PathBuf {
    match &track.dir {
        Some(dir) => dir.join(METADATA_FILE),
        None => source_root(base, track.source)
            .join(&track.track_id)
            .join(METADATA_FILE),
    }
}

/// Atomically write a track's metadata, stamping `updated_at` with the
/// current time, which is returned at the precision it was written with.
pub fn save_metadata(path: &Path, track: &Track) -> Result<DateTime<Utc>, TrackIoError> {
    let now = Utc::now().trunc_subsecs(0);
    let content = serialize_metadata(track, now)?;
    atomic_write(path, content.as_bytes()).map_err(|e| TrackIoError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(track_id = %track.track_id, path = %path.display(), "saved metadata");
    Ok(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_track(base: &Path, source: TrackSource, dir: &str, meta: &str, plan: Option<&str>) {
        let track_dir = source_root(base, source).join(dir);
        fs::create_dir_all(&track_dir).unwrap();
        fs::write(track_dir.join(METADATA_FILE), meta).unwrap();
        if let Some(plan) = plan {
            fs::write(track_dir.join(PLAN_FILE), plan).unwrap();
        }
    }

    #[test]
    fn empty_base_has_no_tracks() {
        let tmp = TempDir::new().unwrap();
        assert!(discover_tracks(tmp.path()).is_empty());
    }

    #[test]
    fn discovers_active_and_archived() {
        let tmp = TempDir::new().unwrap();
        write_track(
            tmp.path(),
            TrackSource::Active,
            "old",
            r#"{"track_id":"old","created_at":"2025-01-01T00:00:00Z"}"#,
            None,
        );
        write_track(
            tmp.path(),
            TrackSource::Active,
            "new",
            r#"{"track_id":"new","created_at":"2025-06-01T00:00:00Z"}"#,
            Some("## Phase 1: Go\n- [x] Task: Ship `abcdef1`\n"),
        );
        write_track(
            tmp.path(),
            TrackSource::Archived,
            "gone",
            r#"{"track_id":"gone","created_at":"2025-09-01T00:00:00Z"}"#,
            None,
        );

        let tracks = discover_tracks(tmp.path());
        let ids: Vec<&str> = tracks.iter().map(|t| t.track_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "gone"]);
        assert_eq!(tracks[2].source, TrackSource::Archived);
        assert_eq!(tracks[0].phases.len(), 1);
        assert_eq!(tracks[0].phases[0].tasks[0].commit, "abcdef1");
        assert!(tracks[1].phases.is_empty());
    }

    #[test]
    fn skips_bad_and_missing_metadata() {
        let tmp = TempDir::new().unwrap();
        write_track(tmp.path(), TrackSource::Active, "bad", "not json", None);
        fs::create_dir_all(source_root(tmp.path(), TrackSource::Active).join("empty")).unwrap();
        fs::write(
            source_root(tmp.path(), TrackSource::Active).join("stray.txt"),
            "x",
        )
        .unwrap();
        write_track(tmp.path(), TrackSource::Active, "good", "{}", None);

        let tracks = discover_tracks(tmp.path());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].track_id, "good");
        assert_eq!(tracks[0].kind, "unknown");
    }

    #[test]
    fn track_id_falls_back_to_dir_name() {
        let tmp = TempDir::new().unwrap();
        write_track(tmp.path(), TrackSource::Active, "dir-name", r#"{"type":"bug"}"#, None);
        let track =
            load_track_dir(&source_root(tmp.path(), TrackSource::Active).join("dir-name"), TrackSource::Active)
                .unwrap();
        assert_eq!(track.track_id, "dir-name");
        assert_eq!(track.kind, "bug");
    }

    #[test]
    fn plan_with_invalid_utf8_still_parses() {
        let tmp = TempDir::new().unwrap();
        write_track(tmp.path(), TrackSource::Active, "latin1", r#"{"track_id":"latin1"}"#, None);
        let dir = source_root(tmp.path(), TrackSource::Active).join("latin1");
        fs::write(
            dir.join(PLAN_FILE),
            b"## Phase 1: Setup\n- [x] Task: Caf\xE9\n## Phase 2: More\n",
        )
        .unwrap();

        let track = load_track_dir(&dir, TrackSource::Active).unwrap();
        assert_eq!(track.phases.len(), 2);
        assert_eq!(track.phases[0].tasks.len(), 1);
        assert_eq!(track.phases[0].tasks[0].name, "Caf\u{FFFD}");
        assert_eq!(track.phases[1].name, "More");
    }

    #[test]
    fn metadata_path_prefers_loaded_dir() {
        let base = Path::new("/project");
        let mut track = Track {
            track_id: "abc".into(),
            source: TrackSource::Archived,
            ..Track::default()
        };
        assert_eq!(
            metadata_path(base, &track),
            PathBuf::from("/project/conductor/archive/abc/metadata.json")
        );
        track.dir = Some(PathBuf::from("/project/conductor/archive/other"));
        assert_eq!(
            metadata_path(base, &track),
            PathBuf::from("/project/conductor/archive/other/metadata.json")
        );
    }

    #[test]
    fn save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(METADATA_FILE);
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let track = Track {
            track_id: "t".into(),
            kind: "feature".into(),
            status: "completed".into(),
            description: "Round trip".into(),
            created_at: Some(created),
            updated_at: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            ..Track::default()
        };

        let before = Utc::now() - chrono::Duration::seconds(1);
        let stamped = save_metadata(&path, &track).unwrap();
        let loaded = load_metadata(&fs::read(&path).unwrap()).unwrap();

        assert_eq!(loaded.track_id, "t");
        assert_eq!(loaded.kind, "feature");
        assert_eq!(loaded.status, "completed");
        assert_eq!(loaded.description, "Round trip");
        assert_eq!(loaded.created_at, Some(created));
        let updated = loaded.updated_at.unwrap();
        assert!(updated >= before);
        assert_eq!(updated, stamped);
    }

    #[test]
    fn save_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join(METADATA_FILE);
        let err = save_metadata(&path, &Track::default()).unwrap_err();
        assert!(matches!(err, TrackIoError::WriteError { .. }));
    }
}
