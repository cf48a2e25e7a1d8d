use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid number for {field}: {input:?}")]
    InvalidNumber { field: &'static str, input: String },
    #[error("{field} must be >= 0, got {value}")]
    NegativeMeasurement { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table {name} has no samples")]
    Empty { name: String },
    #[error("table {name} has a non-finite value at index {index}")]
    NonFinite { name: String, index: usize },
    #[error("table {name} is not sorted by x at index {index}")]
    Unsorted { name: String, index: usize },
    #[error("table {name} repeats x at index {index}")]
    DuplicateX { name: String, index: usize },
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("invalid defaults: {0}")]
    InvalidDefaults(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
