//! Error types for shipdocs.

/// Top-level error type for the backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Document rendering errors.
///
/// The extractor itself is infallible by contract — malformed input degrades
/// to a partial or empty record. Only the renderer can fail, and only for
/// reasons outside the shipment data: a missing template or an I/O fault.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the backend.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrella_error_wraps_config_errors() {
        let err: Error = ConfigError::InvalidValue {
            key: "SHIPDOCS_BIND_ADDR".into(),
            message: "not a socket address".into(),
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn umbrella_error_wraps_render_errors() {
        let err: Error = RenderError::TemplateNotFound {
            name: "invoice".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Render error: Template not found: invoice"
        );
    }

    #[test]
    fn umbrella_error_wraps_pattern_errors() {
        let bad = regex::Regex::new("(").unwrap_err();
        let err: Error = bad.into();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn umbrella_error_wraps_io_errors() {
        let err: Error = std::io::Error::other("port in use").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
