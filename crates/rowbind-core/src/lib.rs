// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for rowbind.
//!
//! This crate provides the runtime vocabulary used by code generated with
//! `#[rowbind::schema]`. It can also be used on its own to implement a
//! backend.
//!
//! # Overview
//!
//! - [`Backend`] / [`RowCursor`] — the row store a generated builder queries
//! - [`QueryRequest`] — one query: locator, projection, selection, sort
//! - [`Locator`] — handle identifying the queryable resource
//! - [`Operator`] / [`SortDirection`] — arguments of constraint and sort calls
//! - [`state`] — marker types for the builder protocol
//! - [`CursorGuard`] — closes a cursor on every exit path
//! - [`Error`] — runtime failures
//!
//! # Usage
//!
//! Most users depend on `rowbind`, which re-exports this crate. Backend
//! authors only need:
//!
//! ```rust,ignore
//! use rowbind_core::{Backend, QueryRequest, RowCursor};
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod backend;
mod cursor;
mod error;
mod locator;
pub mod prelude;
pub mod state;

pub use backend::{Backend, COUNT_COLUMN, QueryRequest, execute};
pub use cursor::{CursorGuard, RowCursor};
pub use error::{Error, Result};
pub use locator::Locator;

/// Comparison applied by a constraint call.
///
/// The SQL fragment is inserted between the column and its `?` placeholder:
/// `Operator::Le` on column `age` yields `age<=?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `=`
    Eq,

    /// `!=`
    Ne,

    /// `<`
    Lt,

    /// `<=`
    Le,

    /// `>`
    Gt,

    /// `>=`
    Ge,

    /// Pattern match, ` LIKE `.
    Like
}

impl Operator {
    /// Convert to the SQL fragment placed before the placeholder.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => " LIKE "
        }
    }
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,

    /// Descending order (Z-A, 9-0, newest first).
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}
