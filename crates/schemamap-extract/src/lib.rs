#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod introspect;

pub use config::{ClientConfig, ClientRegistry, DEFAULT_REGISTRY_PATH, REGISTRY_PATH_VAR};
pub use error::{ExtractError, Result};
pub use introspect::{SchemaExtractor, backfill_foreign_keys};
