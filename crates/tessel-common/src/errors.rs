use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),

    #[error("unknown settings key: {0}")]
    UnknownKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid hotkey: {0}")]
    InvalidHotkey(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures reported when acting on an embedded content surface.
///
/// These are never fatal: the shell logs them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no surface registered for tab {0}")]
    NotFound(String),

    #[error("surface unavailable: {0}")]
    Unavailable(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TesselError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::UnknownKey("settings.nope".into());
        assert_eq!(err.to_string(), "unknown settings key: settings.nope");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidHotkey("ctrl+".into());
        assert_eq!(err.to_string(), "invalid hotkey: ctrl+");
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::NotFound("abc".into());
        assert_eq!(err.to_string(), "no surface registered for tab abc");
    }

    #[test]
    fn tessel_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TesselError = config_err.into();
        assert!(matches!(err, TesselError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tessel_error_from_surface() {
        let err: TesselError = SurfaceError::Unavailable("crashed".into()).into();
        assert!(matches!(err, TesselError::Surface(_)));
        assert_eq!(err.to_string(), "surface unavailable: crashed");
    }

    #[test]
    fn tessel_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TesselError = io_err.into();
        assert!(matches!(err, TesselError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
