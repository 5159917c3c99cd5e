pub mod category;
pub mod descriptor;
pub mod error;
pub mod mapping;

pub use category::Category;
pub use descriptor::{ColumnDescriptor, ForeignKey, TableDescriptor};
pub use error::{MappingError, Result};
pub use mapping::{
    ClientInfo, ClientProfile, DatabaseMapping, FieldMapping, FieldMetadata, GeneratorInfo,
    SearchIndex, TableMapping, TableSummary,
};
