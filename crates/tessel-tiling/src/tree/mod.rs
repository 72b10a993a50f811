mod operations;
mod traversal;
mod types;

pub use operations::{MAX_SPLIT_PERCENTAGE, MIN_SPLIT_PERCENTAGE};
pub use types::*;
