//! Defaults and validity bounds for OTP credentials.

use std::ops::RangeInclusive;

/// Default number of digits in a rendered code.
pub const DEFAULT_DIGITS: u32 = 6;

/// Default step size in seconds for time-based tokens.
pub const DEFAULT_PERIOD: f64 = 30.0;

/// Digit counts a credential may ask a generator to render.
pub const VALID_DIGITS: RangeInclusive<u32> = 6..=8;

/// Longest step size in seconds a credential is considered valid with.
pub const MAX_PERIOD: f64 = 300.0;
