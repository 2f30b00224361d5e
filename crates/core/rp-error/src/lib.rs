//! Error types and classification for Rowpipe.
//!
//! This crate provides:
//! - [`RpError`] - Top-level error enum for all filter errors
//! - Domain-specific errors ([`CodecError`], [`SchemaError`])
//! - [`ErrorScope`] for null-and-continue vs. abort-record decision making
//! - Error classification logic based on error type

use thiserror::Error;

/// Top-level error type for Rowpipe.
#[derive(Error, Debug)]
pub enum RpError {
    /// Codec errors (hex parsing, Base-58 alphabet)
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Schema errors (declared-type violations, record shape)
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Codec-related errors, raised while converting a single field value.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Encode input is not valid even-length hex
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    /// Decode input contains a character outside the Base-58 alphabet
    #[error("Invalid Base-58 character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
}

/// Schema-related errors, raised when the pipeline's schema contract is broken.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A column's declared or actual type does not allow the requested read
    #[error("Column '{column}' (index {index}) is {actual}, expected {expected}")]
    TypeMismatch {
        column: String,
        index: usize,
        expected: String,
        actual: String,
    },

    /// A record's value count does not match its schema
    #[error("Record has {actual} values, schema declares {expected} columns")]
    Width { expected: usize, actual: usize },
}

/// Error classification for recovery decisions.
///
/// Used to determine whether a failure degrades one field to null or aborts
/// the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Field-scoped failure - log it, write null, continue with the record
    ///
    /// Examples: malformed hex on encode, alphabet violation on decode
    Field,

    /// Record-scoped failure - abort the record and propagate to the host
    ///
    /// Examples: rule targeting a non-text column, record width mismatch
    Record,
}

/// Classifies an error to determine recovery behavior.
///
/// # Arguments
///
/// * `error` - The error to classify
///
/// # Returns
///
/// The appropriate [`ErrorScope`] for null-vs-abort decisions
pub fn classify_error(error: &RpError) -> ErrorScope {
    match error {
        RpError::Codec(e) => classify_codec_error(e),
        RpError::Schema(_) => ErrorScope::Record,
        RpError::Config(_) => ErrorScope::Record,
        RpError::Other(_) => ErrorScope::Record,
    }
}

fn classify_codec_error(error: &CodecError) -> ErrorScope {
    match error {
        CodecError::InvalidHex(_) => ErrorScope::Field,
        CodecError::InvalidCharacter { .. } => ErrorScope::Field,
    }
}

/// Result type alias using RpError.
pub type Result<T> = std::result::Result<T, RpError>;
