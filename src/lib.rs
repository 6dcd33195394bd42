pub mod algorithm;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod token;
