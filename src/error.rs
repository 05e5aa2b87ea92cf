use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Record at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
    #[error("Default key {0:?} has no matching record")]
    MissingDefault(String),
    #[error("No default key declared")]
    NoDefault,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse {catalog} catalog: {source}")]
    Parse {
        catalog: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid {catalog} catalog: {source}")]
    Invalid {
        catalog: &'static str,
        #[source]
        source: CatalogError,
    },
}
