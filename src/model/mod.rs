pub mod config;
pub mod track;

pub use config::*;
pub use track::*;
