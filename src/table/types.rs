//! Sort and page state types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort field and direction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Field being sorted on, `None` for insertion order
    pub field: Option<String>,
    /// Direction of the sort
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a header click: the same field flips direction, a new field
    /// starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    /// Back to insertion order
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a sort field is set
    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }
}

/// Allowed page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Size25,
    #[default]
    Size50,
    Size100,
    Size250,
}

impl PageSize {
    /// All allowed sizes, smallest first
    pub const ALL: [PageSize; 4] = [
        PageSize::Size25,
        PageSize::Size50,
        PageSize::Size100,
        PageSize::Size250,
    ];

    /// Number of rows per page
    pub fn get(self) -> usize {
        match self {
            PageSize::Size25 => 25,
            PageSize::Size50 => 50,
            PageSize::Size100 => 100,
            PageSize::Size250 => 250,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        PageSize::ALL
            .into_iter()
            .find(|s| s.get() == value)
            .ok_or_else(|| {
                Error::invalid_value(
                    "page_size",
                    format!("{value} is not one of 25, 50, 100, 250"),
                )
            })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_value("page_size", format!("'{s}' is not a number")))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page, never below 1
    pub current_page: usize,
    /// Rows per page
    pub page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl PageState {
    /// Create page state starting on page 1
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Number of pages for `total` rows
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get())
    }

    /// Index range of the current page within `total` rows
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let size = self.page_size.get();
        let start = self.current_page.saturating_sub(1).saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        start..end
    }

    /// Whether a next page exists
    pub fn has_next(&self, total: usize) -> bool {
        self.current_page < self.page_count(total)
    }

    /// Whether a previous page exists
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}
