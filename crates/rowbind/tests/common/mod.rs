// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory backend shared by the integration tests.
//!
//! Rows are served as given, whatever the selection says. The backend
//! records every request it sees and counts how many cursors were closed.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc
};

use rowbind::{Backend, Error, QueryRequest, Result, RowCursor};

/// One cell of a stored row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Real(f64),
    Text(String)
}

/// Shorthand for a text cell.
pub fn text(value: &str) -> Value {
    Value::Text(value.to_owned())
}

/// Owned copy of a [`QueryRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub locator:        String,
    pub projection:     Option<Vec<String>>,
    pub selection:      Option<String>,
    pub selection_args: Option<Vec<String>>,
    pub sort_order:     Option<String>
}

impl Recorded {
    fn of(request: &QueryRequest<'_>) -> Self {
        Self {
            locator:        request.locator.to_string(),
            projection:     request
                .projection
                .map(|columns| columns.iter().map(|c| (*c).to_owned()).collect()),
            selection:      request.selection.map(str::to_owned),
            selection_args: request.selection_args.map(<[String]>::to_vec),
            sort_order:     request.sort_order.map(str::to_owned)
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows:       Vec<Vec<Value>>,
    count_rows: Option<Vec<Vec<Value>>>,
    fail:       bool,
    requests:   RefCell<Vec<Recorded>>,
    closes:     Rc<Cell<usize>>
}

impl MemoryBackend {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Backend whose every query fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Serve `rows` to count requests instead of the computed count.
    pub fn with_count_rows(mut self, rows: Vec<Vec<Value>>) -> Self {
        self.count_rows = Some(rows);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn closes(&self) -> usize {
        self.closes.get()
    }
}

impl Backend for MemoryBackend {
    type Cursor = MemoryCursor;

    fn query(&self, request: &QueryRequest<'_>) -> Result<MemoryCursor> {
        self.requests.borrow_mut().push(Recorded::of(request));
        if self.fail {
            return Err(Error::backend("backend offline"));
        }

        let rows = if request.is_count() {
            self.count_rows
                .clone()
                .unwrap_or_else(|| vec![vec![Value::Int(self.rows.len() as i64)]])
        } else {
            self.rows.clone()
        };

        Ok(MemoryCursor {
            rows,
            position: None,
            closes: Rc::clone(&self.closes)
        })
    }
}

#[derive(Debug)]
pub struct MemoryCursor {
    rows:     Vec<Vec<Value>>,
    position: Option<usize>,
    closes:   Rc<Cell<usize>>
}

impl MemoryCursor {
    fn cell(&self, column: usize) -> Result<&Value> {
        let row = self
            .position
            .ok_or_else(|| Error::backend("cursor is not positioned"))?;
        self.rows[row]
            .get(column)
            .ok_or_else(|| Error::backend(format!("no column {column}")))
    }

    fn int(&self, column: usize) -> Result<i64> {
        match self.cell(column)? {
            Value::Int(value) => Ok(*value),
            Value::Null => Err(Error::NullValue { column }),
            other => Err(Error::backend(format!("{other:?} is not an integer")))
        }
    }

    fn real(&self, column: usize) -> Result<f64> {
        match self.cell(column)? {
            Value::Real(value) => Ok(*value),
            Value::Int(value) => Ok(*value as f64),
            Value::Null => Err(Error::NullValue { column }),
            other => Err(Error::backend(format!("{other:?} is not a number")))
        }
    }
}

impl RowCursor for MemoryCursor {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn move_to(&mut self, row: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                len:   self.rows.len()
            });
        }
        self.position = Some(row);
        Ok(())
    }

    fn is_null(&self, column: usize) -> Result<bool> {
        Ok(matches!(self.cell(column)?, Value::Null))
    }

    fn get_text(&self, column: usize) -> Result<String> {
        match self.cell(column)? {
            Value::Text(value) => Ok(value.clone()),
            Value::Null => Err(Error::NullValue { column }),
            other => Err(Error::backend(format!("{other:?} is not text")))
        }
    }

    fn get_i16(&self, column: usize) -> Result<i16> {
        i16::try_from(self.int(column)?).map_err(Error::backend)
    }

    fn get_i32(&self, column: usize) -> Result<i32> {
        i32::try_from(self.int(column)?).map_err(Error::backend)
    }

    fn get_i64(&self, column: usize) -> Result<i64> {
        self.int(column)
    }

    fn get_f32(&self, column: usize) -> Result<f32> {
        self.real(column).map(|value| value as f32)
    }

    fn get_f64(&self, column: usize) -> Result<f64> {
        self.real(column)
    }

    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

/// Route `rowbind` logs to the test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("rowbind=trace"))
        .with_test_writer()
        .try_init();
}
