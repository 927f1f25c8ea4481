pub mod artifact;
pub mod backend;
pub mod builder;

pub use artifact::{table_version, TableArtifact, TableBuildConfig, TABLE_ENTRIES};
pub use backend::{Backend, TableConverter, TableLoadError};
pub use builder::{TableBuildError, TableBuilder};
