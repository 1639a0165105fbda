// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row cursor contract and scoped release.
//!
//! A [`RowCursor`] is the only resource generated code ever holds. Every path
//! that acquires one either hands it to a result list or wraps it in a
//! [`CursorGuard`], which closes it on drop.

use std::ops::{Deref, DerefMut};

use crate::error::Result;

/// Finite, randomly positionable sequence of result rows.
///
/// Column accessors are positional and typed. Implementations report type
/// mismatches and I/O problems through [`Error::Backend`](crate::Error) and
/// unexpected `NULL`s through [`Error::NullValue`](crate::Error).
pub trait RowCursor {
    /// Number of rows in the result set.
    fn row_count(&self) -> usize;

    /// Position the cursor on `row`.
    fn move_to(&mut self, row: usize) -> Result<()>;

    /// Check whether `column` of the current row is `NULL`.
    fn is_null(&self, column: usize) -> Result<bool>;

    /// Read `column` as text.
    fn get_text(&self, column: usize) -> Result<String>;

    /// Read `column` as a 16-bit integer.
    fn get_i16(&self, column: usize) -> Result<i16>;

    /// Read `column` as a 32-bit integer.
    fn get_i32(&self, column: usize) -> Result<i32>;

    /// Read `column` as a 64-bit integer.
    fn get_i64(&self, column: usize) -> Result<i64>;

    /// Read `column` as a single precision float.
    fn get_f32(&self, column: usize) -> Result<f32>;

    /// Read `column` as a double precision float.
    fn get_f64(&self, column: usize) -> Result<f64>;

    /// Release the underlying resource.
    ///
    /// Called exactly once by [`CursorGuard`]. Positional access afterwards
    /// is up to the implementation.
    fn close(&mut self);
}

/// Owns a cursor and closes it when dropped.
///
/// ```rust,ignore
/// let cursor = CursorGuard::new(backend.query(&request)?);
/// cursor.move_to(0)?;          // early returns still close the cursor
/// let total = cursor.get_i64(0)?;
/// ```
#[derive(Debug)]
pub struct CursorGuard<C: RowCursor> {
    cursor: C
}

impl<C: RowCursor> CursorGuard<C> {
    /// Take ownership of `cursor`.
    pub const fn new(cursor: C) -> Self {
        Self {
            cursor
        }
    }
}

impl<C: RowCursor> Deref for CursorGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: RowCursor> DerefMut for CursorGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: RowCursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        tracing::trace!(target: "rowbind", rows = self.cursor.row_count(), "closing cursor");
        self.cursor.close();
    }
}
