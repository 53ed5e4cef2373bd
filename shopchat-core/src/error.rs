use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopchatError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Other error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_failures_carry_the_store_error() {
        let err = ShopchatError::Database(sqlx::Error::PoolTimedOut);
        let msg = err.to_string();
        assert!(msg.starts_with("Database error: "), "got: {}", msg);
    }

    #[test]
    fn ipc_errors_carry_the_frame_message() {
        let err = ShopchatError::Ipc("deserialization failed: bad frame".to_string());
        assert_eq!(err.to_string(), "IPC error: deserialization failed: bad frame");
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no socket");
        let err: ShopchatError = io.into();
        assert!(matches!(err, ShopchatError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }
}
