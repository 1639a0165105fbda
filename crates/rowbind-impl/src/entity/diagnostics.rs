// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema diagnostics sink.
//!
//! Schema errors do not stop generation: they are collected here while the
//! whole module is processed and emitted at the end as `compile_error!`
//! invocations, each attached to the span of the offending declaration.
//!
//! The same problem reached twice (e.g. an ancestor field checked once for
//! the ancestor and once for each subtype) is reported once.

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};

/// Error attached to a bare span.
pub fn error_at(span: Span, message: impl std::fmt::Display) -> darling::Error {
    syn::Error::new(span, message).into()
}

/// Accumulated schema errors.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<darling::Error>,
    seen:   HashSet<String>
}

impl Diagnostics {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. Errors with an already reported message are dropped.
    pub fn report(&mut self, error: darling::Error) {
        if self.seen.insert(error.to_string()) {
            self.errors.push(error);
        }
    }

    /// Record several errors.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = darling::Error>) {
        for error in errors {
            self.report(error);
        }
    }

    /// Number of distinct errors.
    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages in report order.
    #[cfg(test)]
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Emit every error as `compile_error!`.
    #[must_use]
    pub fn into_tokens(self) -> TokenStream {
        if self.errors.is_empty() {
            return TokenStream::new();
        }
        darling::Error::multiple(self.errors).write_errors()
    }
}
