#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read client registry {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse client registry {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no connection profile for client {client}")]
    MissingClient { client: String },

    #[error("failed to connect to database for client {client}: {source}")]
    Connect {
        client: String,
        #[source]
        source: postgres::Error,
    },

    #[error("catalog query failed ({context}): {source}")]
    Query {
        context: String,
        #[source]
        source: postgres::Error,
    },

    #[error("extracted descriptor rejected for {table}: {source}")]
    Descriptor {
        table: String,
        #[source]
        source: schemamap_model::MappingError,
    },
}

impl ExtractError {
    pub(crate) fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn query(context: impl Into<String>, source: postgres::Error) -> Self {
        Self::Query {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
