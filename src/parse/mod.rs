pub mod metadata;
pub mod plan_parser;

pub use metadata::{MetadataError, load_metadata, serialize_metadata};
pub use plan_parser::parse_plan;
