// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error types.
use miette::Diagnostic;
use thiserror::Error as ThisError;

use crate::value::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NonNumeric,
    InvalidLiteral,
}

/// Type of error returned by scalar coercion operations.
///
/// Coercion is a pure deterministic function, so every failure is local to the single value being
/// coerced: callers decide how to present it, e.g. by aggregating it into a request-level error
/// list or aborting execution of the enclosing field.
#[derive(Debug, Diagnostic, ThisError)]
#[must_use]
pub enum Error {
    /// A value that cannot be represented as a finite float.
    ///
    /// `value` is a safe textual rendering of the offending value, not the value itself.
    #[error("Float cannot represent non numeric value: {value}")]
    #[diagnostic()]
    NonNumeric { value: String },

    /// A literal of a lexical kind that the scalar cannot coerce.
    ///
    /// Intentionally without a message: the caller wraps this into a richer error carrying the
    /// source position and text of the offending literal, which are not known at this layer.
    #[error("")]
    #[diagnostic()]
    InvalidLiteral,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NonNumeric { .. } => ErrorKind::NonNumeric,
            Error::InvalidLiteral => ErrorKind::InvalidLiteral,
        }
    }

    pub fn non_numeric(value: &Value) -> Box<Self> {
        Box::new(Self::NonNumeric {
            value: value.to_string(),
        })
    }

    pub fn invalid_literal() -> Box<Self> {
        Box::new(Self::InvalidLiteral)
    }
}

/// A value or an `Error`
pub type Result<T> = std::result::Result<T, Box<Error>>;
