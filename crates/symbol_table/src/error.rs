use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("key not found")]
    KeyNotFound,

    #[error("symbol table is empty")]
    EmptyTree,

    /// No key satisfies a `floor`/`ceil` query.
    #[error("no key in range")]
    KeyOutOfRange,

    #[error("index {index} out of range for table of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("interval with this low endpoint is already present")]
    DuplicateLow,

    #[error("interval low endpoint exceeds its high endpoint")]
    InvalidInterval,

    /// A structural invariant does not hold. Only produced by `validate`.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
