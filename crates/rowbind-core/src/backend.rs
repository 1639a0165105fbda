// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Backend contract consumed by generated query builders.
//!
//! Generated code never talks to a row store directly. It accumulates a
//! selection, its positional arguments and a sort order, then issues one
//! [`QueryRequest`] through [`execute`].
//!
//! # Request Shapes
//!
//! | Terminal | `projection` | Cursor contents |
//! |----------|--------------|-----------------|
//! | `get()` | `Some(columns)` | one column per mapped field, projection order |
//! | `count()` | `None` | one synthetic [`COUNT_COLUMN`] column, one row |

use crate::{cursor::RowCursor, error::Result, locator::Locator};

/// Column a backend must produce for a count request.
pub const COUNT_COLUMN: &str = "count(*)";

/// One query against the backing resource.
///
/// Absent parts are `None`, never empty strings or empty slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryRequest<'a> {
    /// Resource the query targets.
    pub locator: &'a Locator,

    /// Requested columns, or `None` for the count shape.
    pub projection: Option<&'a [&'a str]>,

    /// Selection predicate with `?` placeholders.
    pub selection: Option<&'a str>,

    /// Positional arguments for the placeholders, already stringified.
    pub selection_args: Option<&'a [String]>,

    /// Sort clause, e.g. `display_name ASC,_id DESC`.
    pub sort_order: Option<&'a str>
}

impl QueryRequest<'_> {
    /// Check if this request asks for a row count.
    #[must_use]
    pub const fn is_count(&self) -> bool {
        self.projection.is_none()
    }
}

/// Queryable row store.
///
/// ```rust,ignore
/// impl Backend for ContentResolver {
///     type Cursor = ResolverCursor;
///
///     fn query(&self, request: &QueryRequest<'_>) -> rowbind::Result<ResolverCursor> {
///         let columns = request.projection.unwrap_or(&[COUNT_COLUMN]);
///         self.resolve(request.locator.as_str(), columns, request.selection, ...)
///             .map_err(rowbind::Error::backend)
///     }
/// }
/// ```
pub trait Backend {
    /// Cursor type produced by [`Backend::query`].
    type Cursor: RowCursor;

    /// Run a single blocking query.
    fn query(&self, request: &QueryRequest<'_>) -> Result<Self::Cursor>;
}

impl<B: Backend + ?Sized> Backend for &B {
    type Cursor = B::Cursor;

    fn query(&self, request: &QueryRequest<'_>) -> Result<Self::Cursor> {
        (**self).query(request)
    }
}

/// Dispatch a request to `backend`, logging it under the `rowbind` target.
pub fn execute<B: Backend + ?Sized>(backend: &B, request: &QueryRequest<'_>) -> Result<B::Cursor> {
    tracing::debug!(
        target: "rowbind",
        locator = %request.locator,
        count = request.is_count(),
        selection = ?request.selection,
        selection_args = ?request.selection_args,
        sort_order = ?request.sort_order,
        "dispatching query"
    );
    let cursor = backend.query(request);
    if let Err(err) = &cursor {
        tracing::debug!(target: "rowbind", error = %err, "query failed");
    }
    cursor
}
