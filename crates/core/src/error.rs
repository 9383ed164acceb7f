#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A location carries configuration the engine cannot work with,
    /// e.g. an unknown IANA timezone identifier.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
