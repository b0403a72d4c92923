pub mod atomic;
pub mod config_io;
pub mod track_io;

pub use track_io::{TrackIoError, discover_tracks, metadata_path, save_metadata};
