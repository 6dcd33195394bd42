//! OTP credential value type.
//!
//! A [`Token`] captures everything needed to later compute an HOTP or TOTP code: the shared
//! secret, the hash algorithm, the digit count, and the moving factor (an incrementing counter
//! or a fixed time step). Code generation, secret storage, and `otpauth://` serialization all
//! live with the caller; this module only models the parameters and answers whether they are
//! usable.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
  algorithm::Algorithm,
  constants::{DEFAULT_DIGITS, DEFAULT_PERIOD, MAX_PERIOD, VALID_DIGITS},
  error::TokenError,
};

/// Moving factor selecting counter-based (HOTP) or time-based (TOTP) generation.
///
/// Two kinds compare equal only when they are the same variant carrying an equal payload, so
/// `Counter(5) != Counter(6)` and a `Counter` never equals a `Timer` regardless of payloads.
/// No `Eq` because the timer payload is a float.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
  /// Counter-based (HOTP); carries the current counter value.
  #[serde(rename = "hotp")]
  Counter(u64),
  /// Time-based (TOTP); carries the step interval in seconds.
  #[serde(rename = "totp")]
  Timer(f64),
}

impl TokenKind {
  /// Canonical lowercase identifier: `"hotp"` for counter tokens, `"totp"` for timer tokens.
  pub fn short_name(&self) -> &'static str {
    match self {
      TokenKind::Counter(_) => "hotp",
      TokenKind::Timer(_) => "totp",
    }
  }

  /// Classifies a short name back into a kind with a default payload.
  ///
  /// The payload is not encoded in the short name, so `"hotp"` always yields `Counter(0)` and
  /// `"totp"` always yields `Timer(30.0)` no matter what the original token carried. This is a
  /// classification helper, not a round-trip codec.
  pub fn from_short_name(raw: &str) -> Option<Self> {
    match raw {
      "hotp" => Some(TokenKind::Counter(0)),
      "totp" => Some(TokenKind::Timer(DEFAULT_PERIOD)),
      _ => {
        log::trace!("unrecognized token kind: {raw:?}");
        None
      },
    }
  }
}

impl std::fmt::Display for TokenKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.short_name())
  }
}

impl FromStr for TokenKind {
  type Err = TokenError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_short_name(s).ok_or_else(|| TokenError::UnknownTokenKind(s.to_string()))
  }
}

/// Optional parameters for [`Token::new`]. Every `None` falls back to a default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenOptions {
  /// Display label, usually an account name or email. Defaults to empty.
  pub name:      Option<String>,
  /// Provider or service the credential is associated with. Defaults to empty.
  pub issuer:    Option<String>,
  /// Hash algorithm for the HMAC (default: SHA-1).
  pub algorithm: Option<Algorithm>,
  /// Number of digits in the rendered code (default 6).
  pub digits:    Option<u32>,
  /// Step size in seconds for timer tokens (default 30).
  pub period:    Option<f64>,
  /// Initial counter value for counter tokens (default 0).
  pub counter:   Option<u64>,
}

/// An immutable OTP credential.
///
/// Fields are fixed at construction and only readable afterwards. Construction never fails:
/// out-of-range parameters are stored as given and surface through [`Token::is_valid`] instead
/// of an error path.
///
/// The moving factor in `kind` carries its own counter or period alongside the top-level
/// `counter` and `period` fields. The top-level fields are what [`Token::is_valid`] consults;
/// see the method docs.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
  name:      String,
  issuer:    String,
  kind:      TokenKind,
  secret:    Vec<u8>,
  algorithm: Algorithm,
  digits:    u32,
  period:    f64,
  counter:   u64,
}

impl Token {
  /// Builds a credential from its moving factor, shared secret, and options.
  ///
  /// # Example
  ///
  /// ```rust
  /// use onetime::prelude::*;
  ///
  /// let token = Token::new(TokenKind::Timer(30.0), b"12345678901234567890".to_vec(), TokenOptions {
  ///   issuer: Some("ExampleApp".to_string()),
  ///   ..Default::default()
  /// });
  /// assert!(token.is_valid());
  /// ```
  pub fn new(kind: TokenKind, secret: Vec<u8>, options: TokenOptions) -> Self {
    Token {
      name: options.name.unwrap_or_default(),
      issuer: options.issuer.unwrap_or_default(),
      kind,
      secret,
      algorithm: options.algorithm.unwrap_or_default(),
      digits: options.digits.unwrap_or(DEFAULT_DIGITS),
      period: options.period.unwrap_or(DEFAULT_PERIOD),
      counter: options.counter.unwrap_or(0),
    }
  }

  /// Display label for the credential.
  pub fn name(&self) -> &str { &self.name }

  /// Issuing party label.
  pub fn issuer(&self) -> &str { &self.issuer }

  /// Moving factor kind.
  pub fn kind(&self) -> TokenKind { self.kind }

  /// Shared secret bytes.
  pub fn secret(&self) -> &[u8] { &self.secret }

  /// HMAC hash family.
  pub fn algorithm(&self) -> Algorithm { self.algorithm }

  /// Number of digits a generator should render.
  pub fn digits(&self) -> u32 { self.digits }

  /// Step size in seconds for time-based generation.
  pub fn period(&self) -> f64 { self.period }

  /// Initial counter value for counter-based generation.
  pub fn counter(&self) -> u64 { self.counter }

  /// Whether the credential's parameters are usable for code generation.
  ///
  /// True iff the secret is non-empty, `digits` is in `6..=8`, and `period` is in `(0, 300]`.
  /// The top-level `period` is checked even for counter tokens; the payload inside `kind` is
  /// never consulted.
  pub fn is_valid(&self) -> bool {
    let valid_secret = !self.secret.is_empty();
    let valid_digits = VALID_DIGITS.contains(&self.digits);
    let valid_period = self.period > 0.0 && self.period <= MAX_PERIOD;

    valid_secret && valid_digits && valid_period
  }
}

/// Diagnostic representation for logs; not a parseable serialization format.
impl std::fmt::Display for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Token(type:{}, name:{}, issuer:{}, algorithm:{}, digits:{})",
      self.kind.short_name(),
      self.name,
      self.issuer,
      self.algorithm.name(),
      self.digits
    )
  }
}

impl std::fmt::Debug for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Token")
      .field("name", &self.name)
      .field("issuer", &self.issuer)
      .field("kind", &self.kind)
      .field("secret", &format_args!("<{} bytes>", self.secret.len()))
      .field("algorithm", &self.algorithm)
      .field("digits", &self.digits)
      .field("period", &self.period)
      .field("counter", &self.counter)
      .finish()
  }
}
