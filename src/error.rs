use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The candidates ran out before the universe was covered.
    /// `partial` is what was selected up to that point and is not a cover.
    #[error("universe of size {n} cannot be covered: only {covered} elements reachable after selecting {} sets", .partial.len())]
    Uncoverable {
        covered: usize,
        n: usize,
        partial: Vec<usize>,
    },
}

impl CoverError {
    pub(crate) fn invalid(msg: impl Into<String>) -> CoverError {
        CoverError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CoverError>;
