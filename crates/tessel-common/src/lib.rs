pub mod actions;
pub mod errors;
pub mod id;
pub mod surface;
pub mod types;

pub use actions::{Action, Direction};
pub use errors::{ConfigError, PlatformError, SurfaceError, TesselError};
pub use id::{new_id, GroupId, TabId};
pub use surface::SurfaceDetach;
pub use types::{Color, Rect};

pub type Result<T> = std::result::Result<T, TesselError>;
