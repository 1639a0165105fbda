// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resource locator handed to the backend with every query.

use std::fmt;

/// Opaque handle identifying the queryable resource of one entity.
///
/// Generated builders resolve it once, when the chain starts, from the
/// entity's `#[locator]` const or function.
///
/// ```rust
/// use rowbind_core::Locator;
///
/// let locator = Locator::from("content://contacts");
/// assert_eq!(locator.as_str(), "content://contacts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locator(String);

impl Locator {
    /// Create a locator from anything string-like.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the locator text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Locator {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Locator> for Locator {
    fn from(value: &Locator) -> Self {
        value.clone()
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
