//! Error types for mathblock library.

use std::io;
use thiserror::Error;

/// Result type alias for mathblock operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can surface from the fallible entry points
/// (file I/O, mode parsing, serialization).
///
/// Rendering itself never returns an error: conversion and typesetting
/// failures are recovered in place and only show up in the output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The editor mode name is not recognized.
    #[error("Unknown editor mode: {0}")]
    UnknownMode(String),

    /// Math notation could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Typeset notation was rejected by the engine.
    #[error(transparent)]
    Typeset(#[from] TypesetError),

    /// Error during serialization of render output.
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Failure converting an inline math span to typeset notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot convert `{source_expr}`: {reason}")]
pub struct ConversionError {
    /// The trimmed span interior that was passed to the converter.
    pub source_expr: String,
    /// Human-readable cause.
    pub reason: String,
}

impl ConversionError {
    /// Create a new conversion error.
    pub fn new(source_expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_expr: source_expr.into(),
            reason: reason.into(),
        }
    }
}

/// Failure typesetting notation for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot typeset `{notation}`: {reason}")]
pub struct TypesetError {
    /// The notation handed to the engine.
    pub notation: String,
    /// Human-readable cause.
    pub reason: String,
}

impl TypesetError {
    /// Create a new typeset error.
    pub fn new(notation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            notation: notation.into(),
            reason: reason.into(),
        }
    }
}
