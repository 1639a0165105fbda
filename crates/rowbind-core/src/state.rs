// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Protocol state markers.
//!
//! A generated builder `{Collection}Query<S>` is parameterized by one of these
//! uninhabited types. Each state has its own inherent `impl` block, so a
//! method exists only where the protocol allows it:
//!
//! ```text
//! Root ──filter()──▶ Constrainable ──<field>(op, v)──▶ Constrained ──and()/or()──▶ Constrainable
//!   │                                                    │
//!   └──sort_by()──▶ Sortable ◀──────────sort_by()────────┘
//!                     │  ▲
//!        <field>(dir) ▼  │ then_by()
//!                    Sorted
//! ```
//!
//! `get()` and `count()` are available on `Root`, `Constrained` and `Sorted`.

/// Chain start: nothing accumulated yet.
#[derive(Debug)]
pub enum Root {}

/// Expecting a constraint on one field.
#[derive(Debug)]
pub enum Constrainable {}

/// At least one constraint accumulated.
#[derive(Debug)]
pub enum Constrained {}

/// Expecting a sort criterion.
#[derive(Debug)]
pub enum Sortable {}

/// At least one sort criterion accumulated.
#[derive(Debug)]
pub enum Sorted {}
