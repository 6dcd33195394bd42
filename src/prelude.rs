//! Re-exports of the commonly used types so callers can bring the whole credential surface in
//! with a single `use onetime::prelude::*`.
pub use crate::{
  algorithm::Algorithm,
  constants::{DEFAULT_DIGITS, DEFAULT_PERIOD, MAX_PERIOD, VALID_DIGITS},
  error::{TokenError, TokenResult},
  token::{Token, TokenKind, TokenOptions},
};
