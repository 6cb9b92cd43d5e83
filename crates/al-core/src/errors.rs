//! Error types for almanac.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report.  Validation problems (bad month, bad rule token, inverted range)
//! are detected before any day is generated; range problems come from the
//! lunar converter when a date falls outside its table.

use thiserror::Error;

/// The top-level error type used throughout almanac.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument failed validation (month outside `[1, 12]`, year outside
    /// the supported span, start after end, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A holiday rule token could not be parsed.
    #[error("invalid holiday rule {name:?} = {token:?}: {reason}")]
    InvalidRule {
        /// Holiday name the rule is bound to.
        name: String,
        /// The offending token.
        token: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A lunar conversion was requested outside the converter's supported
    /// span.
    #[error("out of supported range: {0}")]
    Range(String),

    /// Civil date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Return `true` for errors raised while validating caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidRule { .. })
    }

    /// Return `true` for lunar-conversion range failures.
    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range(_))
    }
}

/// Shorthand `Result` type used throughout almanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use al_core::{ensure, errors::Error};
/// fn month(m: u8) -> al_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::Validation(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}

/// Return an `Err(Error::InvalidRule { .. })` immediately.
///
/// Used by the rule parsers, which always know the holiday name and token
/// they were handed.
#[macro_export]
macro_rules! fail {
    ($name:expr, $token:expr, $($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidRule {
            name: ($name).to_string(),
            token: ($token).to_string(),
            reason: format!($($msg)*),
        })
    };
}
