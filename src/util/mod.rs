pub mod unicode;
pub mod viewport;

pub use viewport::{Viewport, calc_viewport};
