use onetime::prelude::*;

fn secret() -> Vec<u8> { vec![0x42; 10] }

#[test]
fn timer_token_with_defaults_is_valid() {
  let token = Token::new(TokenKind::Timer(30.0), secret(), TokenOptions::default());

  assert!(token.is_valid());
  assert_eq!(token.name(), "");
  assert_eq!(token.issuer(), "");
  assert_eq!(token.algorithm(), Algorithm::Sha1);
  assert_eq!(token.digits(), 6);
  assert_eq!(token.period(), 30.0);
  assert_eq!(token.counter(), 0);
  assert_eq!(token.to_string(), "Token(type:totp, name:, issuer:, algorithm:SHA1, digits:6)");
}

#[test]
fn empty_secret_dominates_valid_defaults() {
  let token = Token::new(TokenKind::Counter(0), Vec::new(), TokenOptions::default());
  assert!(!token.is_valid());
}

#[test]
fn digit_boundaries() {
  for (digits, valid) in [(5, false), (6, true), (7, true), (8, true), (9, false)] {
    let token = Token::new(TokenKind::Timer(30.0), secret(), TokenOptions {
      digits: Some(digits),
      ..Default::default()
    });
    assert_eq!(token.is_valid(), valid, "digits = {digits}");
  }
}

#[test]
fn period_boundaries() {
  for (period, valid) in [(0.0, false), (0.1, true), (300.0, true), (300.0001, false)] {
    let token = Token::new(TokenKind::Timer(30.0), secret(), TokenOptions {
      period: Some(period),
      ..Default::default()
    });
    assert_eq!(token.is_valid(), valid, "period = {period}");
  }
}

#[test]
fn validity_ignores_the_kind_payload() {
  // The check reads the top-level period even for counter tokens, where the period is
  // semantically irrelevant, and never looks inside the moving factor.
  let counter_with_bad_period = Token::new(TokenKind::Counter(7), secret(), TokenOptions {
    period: Some(0.0),
    ..Default::default()
  });
  assert!(!counter_with_bad_period.is_valid());

  let timer_with_bad_payload = Token::new(TokenKind::Timer(0.0), secret(), TokenOptions {
    period: Some(30.0),
    ..Default::default()
  });
  assert!(timer_with_bad_payload.is_valid());
}

#[test]
fn is_valid_is_deterministic() {
  let token = Token::new(TokenKind::Counter(3), secret(), TokenOptions {
    digits: Some(8),
    ..Default::default()
  });
  assert_eq!(token.is_valid(), token.is_valid());
}

#[test]
fn description_reflects_options() {
  let token = Token::new(TokenKind::Counter(1), secret(), TokenOptions {
    name: Some("alice@example.com".to_string()),
    issuer: Some("ExampleApp".to_string()),
    algorithm: Some(Algorithm::Sha256),
    digits: Some(8),
    ..Default::default()
  });

  assert_eq!(
    token.to_string(),
    "Token(type:hotp, name:alice@example.com, issuer:ExampleApp, algorithm:SHA256, digits:8)"
  );
}

#[test]
fn construction_never_fails_on_invalid_parameters() {
  // Validity is advisory; a token that would be useless to a generator still constructs.
  let token = Token::new(TokenKind::Timer(30.0), Vec::new(), TokenOptions {
    digits: Some(12),
    period: Some(-5.0),
    ..Default::default()
  });

  assert_eq!(token.digits(), 12);
  assert_eq!(token.period(), -5.0);
  assert!(!token.is_valid());
}
