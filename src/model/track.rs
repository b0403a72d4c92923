use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Placeholder used when metadata omits `type` or `status`
pub const UNKNOWN: &str = "unknown";

/// Cycle order for the Status field on the edit screen
pub const STATUS_VALUES: &[&str] = &["new", "in_progress", "completed", "cancelled"];

/// Cycle order for the Type field on the edit screen
pub const TYPE_VALUES: &[&str] = &["feature", "bug", "chore", "refactor"];

/// Which directory root a track was discovered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackSource {
    /// `conductor/tracks/`
    #[default]
    Active,
    /// `conductor/archive/`
    Archived,
}

impl TrackSource {
    /// Name of the directory under `conductor/` holding tracks of this source
    pub fn dir_name(self) -> &'static str {
        match self {
            TrackSource::Active => "tracks",
            TrackSource::Archived => "archive",
        }
    }
}

impl std::fmt::Display for TrackSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackSource::Active => write!(f, "active"),
            TrackSource::Archived => write!(f, "archived"),
        }
    }
}

/// A `    - [x] Title` line under a task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubTask {
    pub name: String,
    pub completed: bool,
}

/// A `- [x] Task: Title` line within a phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub name: String,
    pub completed: bool,
    /// Short commit hash; empty when the plan line carries none
    pub commit: String,
    pub subtasks: Vec<SubTask>,
}

impl Task {
    /// Number of completed sub-tasks
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }
}

/// A `## Phase N: Title` section of a plan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Phase {
    /// Number as written in the plan (need not be contiguous)
    pub number: u32,
    pub name: String,
    /// Checkpoint commit hash; empty when absent
    pub checkpoint: String,
    pub tasks: Vec<Task>,
}

impl Phase {
    /// Number of completed tasks
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// A track: metadata from `metadata.json` plus the phases parsed from `plan.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub track_id: String,
    pub kind: String,
    pub status: String,
    pub description: String,
    pub source: TrackSource,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub phases: Vec<Phase>,
    /// Directory the track was loaded from, if it came from disk
    pub dir: Option<PathBuf>,
}

impl Default for Track {
    fn default() -> Self {
        Track {
            track_id: String::new(),
            kind: UNKNOWN.to_string(),
            status: UNKNOWN.to_string(),
            description: String::new(),
            source: TrackSource::Active,
            created_at: None,
            updated_at: None,
            phases: Vec::new(),
            dir: None,
        }
    }
}

impl Track {
    pub fn is_archived(&self) -> bool {
        self.source == TrackSource::Archived
    }
}

/// A field that can be cycled on the edit screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Status,
    Type,
}

impl EditField {
    /// Fields in display order
    pub const ALL: [EditField; 2] = [EditField::Status, EditField::Type];

    pub fn from_index(idx: usize) -> Option<EditField> {
        Self::ALL.get(idx).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            EditField::Status => "Status",
            EditField::Type => "Type",
        }
    }

    /// The closed set of values this field cycles through
    pub fn values(self) -> &'static [&'static str] {
        match self {
            EditField::Status => STATUS_VALUES,
            EditField::Type => TYPE_VALUES,
        }
    }

    /// Current value of this field on a track
    pub fn get(self, track: &Track) -> &str {
        match self {
            EditField::Status => &track.status,
            EditField::Type => &track.kind,
        }
    }

    pub fn set(self, track: &mut Track, value: &str) {
        match self {
            EditField::Status => track.status = value.to_string(),
            EditField::Type => track.kind = value.to_string(),
        }
    }
}
