pub mod assemble;
pub mod classify;
pub mod sample;

pub use assemble::{
    build_database_mapping, build_field_mapping, build_search_index, build_table_mapping,
};
pub use classify::{categorize, example_phrases};
pub use sample::{sample_mapping, sample_profile, sample_tables};
