use thiserror::Error;

use crate::Field;

/// A workload configuration which cannot be generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("number of clients must be between 1 and 40 (found {0})")]
    ClientsOutOfRange(i64),
    #[error("there must be at least 1 instrument")]
    NoInstruments,
    #[error("there must be at least 1 order")]
    NoOrders,
    #[error("{field} must be an integer (found {input:?})")]
    NotANumber { field: Field, input: String },
    #[error("{field} is too large (found {value})")]
    TooLarge { field: Field, value: i64 },
}
