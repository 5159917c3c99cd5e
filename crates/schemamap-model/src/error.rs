use thiserror::Error;

/// Errors raised while assembling mapping documents.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Extraction produced zero tables for a client. Not fatal to a batch
    /// run; callers log it and move on to the next client.
    #[error("no tables extracted for client {client}")]
    EmptySchema { client: String },

    /// A descriptor broke one of the structural invariants.
    #[error("invalid descriptor for {table}: {message}")]
    InvalidDescriptor { table: String, message: String },
}

impl MappingError {
    pub(crate) fn invalid_descriptor(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            table: table.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
