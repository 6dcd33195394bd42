use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
  #[error("unrecognized token kind: {0:?}")]
  UnknownTokenKind(String),

  #[error("unrecognized algorithm: {0:?}")]
  UnknownAlgorithm(String),
}
