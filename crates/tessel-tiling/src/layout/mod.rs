pub mod borders;
mod calculation;
mod types;

pub use calculation::flatten_to_boxes;
pub use types::*;
