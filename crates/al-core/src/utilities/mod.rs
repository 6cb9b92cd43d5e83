//! Miscellaneous text utilities.

/// Formatting helpers (date keys, ordinals).
pub mod data_formatters;

/// Parsing helpers (date keys, numeric token fields).
pub mod data_parsers;
