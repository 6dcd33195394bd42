//! Hash algorithm family for OTP credentials.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// HMAC hash family a credential selects for code generation.
///
/// The crate never hashes anything itself; this value only tells the eventual generator which
/// function to use. Labels are the stable uppercase identifiers used by authenticator ecosystems.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Algorithm {
  #[serde(rename = "SHA1")]
  Sha1,
  #[serde(rename = "SHA256")]
  Sha256,
  #[serde(rename = "SHA512")]
  Sha512,
}

impl Algorithm {
  /// Stable string identifier for this algorithm.
  pub fn name(&self) -> &'static str {
    match self {
      Algorithm::Sha1 => "SHA1",
      Algorithm::Sha256 => "SHA256",
      Algorithm::Sha512 => "SHA512",
    }
  }
}

impl Default for Algorithm {
  fn default() -> Self { Algorithm::Sha1 }
}

impl std::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Algorithm {
  type Err = TokenError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "SHA1" => Ok(Algorithm::Sha1),
      "SHA256" => Ok(Algorithm::Sha256),
      "SHA512" => Ok(Algorithm::Sha512),
      _ => Err(TokenError::UnknownAlgorithm(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_are_stable() {
    assert_eq!(Algorithm::Sha1.name(), "SHA1");
    assert_eq!(Algorithm::Sha256.name(), "SHA256");
    assert_eq!(Algorithm::Sha512.name(), "SHA512");
    assert_eq!(Algorithm::Sha512.to_string(), "SHA512");
  }

  #[test]
  fn default_is_sha1() {
    assert_eq!(Algorithm::default(), Algorithm::Sha1);
  }

  #[test]
  fn parses_own_labels() {
    assert_eq!("SHA256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
    assert_eq!(
      "sha256".parse::<Algorithm>(),
      Err(TokenError::UnknownAlgorithm("sha256".to_string()))
    );
  }
}
