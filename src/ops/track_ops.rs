use std::cmp::Ordering;

use crate::model::track::{Phase, Track, TrackSource};

/// Order tracks for display: active before archived, newest `created_at`
/// first within a group, undated after dated, then by `track_id`.
pub fn sort_tracks(tracks: &mut [Track]) {
    tracks.sort_by(compare_tracks);
}

fn compare_tracks(a: &Track, b: &Track) -> Ordering {
    source_rank(a.source)
        .cmp(&source_rank(b.source))
        .then_with(|| match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.track_id.cmp(&b.track_id))
}

fn source_rank(source: TrackSource) -> u8 {
    match source {
        TrackSource::Active => 0,
        TrackSource::Archived => 1,
    }
}

/// Tracks shown on the tracks screen, archived ones only when requested
pub fn visible_tracks(tracks: &[Track], show_archived: bool) -> Vec<&Track> {
    tracks
        .iter()
        .filter(|t| show_archived || !t.is_archived())
        .collect()
}

/// Step `delta` places through `values` from `current`, wrapping both ways.
/// A value not in the list resets to the first one.
pub fn cycle_value<'a>(values: &[&'a str], current: &str, delta: isize) -> &'a str {
    let Some(first) = values.first() else {
        return "";
    };
    match values.iter().position(|v| *v == current) {
        Some(i) => {
            let len = values.len() as isize;
            let next = (i as isize + delta).rem_euclid(len) as usize;
            values[next]
        }
        None => first,
    }
}

/// Status of a phase derived from its tasks
pub fn phase_status(phase: &Phase) -> &'static str {
    let done = phase.completed_tasks();
    if phase.tasks.is_empty() {
        "empty"
    } else if done == phase.tasks.len() {
        "completed"
    } else if done > 0 {
        "in_progress"
    } else {
        "pending"
    }
}
