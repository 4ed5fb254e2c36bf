use thiserror::Error;

/// Startup failures. Any of these ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("missing asset '{name}' (looked in {source_desc})")]
    MissingAsset { name: String, source_desc: String },

    #[error("failed to decode texture '{name}': {reason}")]
    TextureDecode { name: String, reason: String },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::MissingAsset {
            name: "tank.png".to_string(),
            source_desc: "embedded assets".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing asset 'tank.png' (looked in embedded assets)"
        );

        let err = GameError::TextureDecode {
            name: "door.png".to_string(),
            reason: "bad header".to_string(),
        };
        assert!(err.to_string().contains("door.png"));
        assert!(err.to_string().contains("bad header"));
    }
}
