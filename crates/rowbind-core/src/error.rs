// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime error type shared by backends and generated code.

/// Result alias used throughout generated query builders.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while executing a query or reading its rows.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Positional access outside `0..len` on a result list.
    #[error("row {index} is out of bounds for a result set of {len} rows")]
    IndexOutOfBounds {
        /// Requested row.
        index: usize,
        /// Number of rows in the result set.
        len:   usize
    },

    /// A count query produced no rows to read the count from.
    #[error("count query returned no rows")]
    EmptyCount,

    /// A non-nullable column held `NULL`.
    #[error("column {column} is NULL")]
    NullValue {
        /// Zero-based column position.
        column: usize
    },

    /// Failure reported by the backend or its cursor.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>)
}

impl Error {
    /// Wrap a backend-specific error.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>
    {
        Self::Backend(err.into())
    }

    /// Check if this error came from the backend.
    pub const fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message() {
        let err = Error::IndexOutOfBounds {
            index: 3,
            len:   2
        };
        assert_eq!(
            err.to_string(),
            "row 3 is out of bounds for a result set of 2 rows"
        );
    }

    #[test]
    fn backend_wraps_strings() {
        let err = Error::backend("connection reset");
        assert!(err.is_backend());
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn null_value_is_not_backend() {
        assert!(!Error::NullValue { column: 0 }.is_backend());
    }
}
