//! # Form State
//!
//! Everything the product form holds between key presses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         FormState                                       │
//! │                                                                         │
//! │  rows      Vec<Product>   ◄── replaced wholesale by every reload       │
//! │  selected  Option<usize>  ◄── reset to None on every reload            │
//! │  entries   [name, price, stock] raw text                               │
//! │                                                                         │
//! │  select(i) ── copies rows[i] into the entries (overwrites typing)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `rows` is a display copy, never the source of truth; commands always go
//! back to the store.

use stockroom_core::Product;

/// One of the three text entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Price,
    Stock,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Price, Field::Stock];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Product Name",
            Field::Price => "Price",
            Field::Stock => "Stock",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Price => 1,
            Field::Stock => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    entries: [String; 3],
    rows: Vec<Product>,
    selected: Option<usize>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Entries
    // =========================================================================

    pub fn entry(&self, field: Field) -> &str {
        &self.entries[field.index()]
    }

    pub fn entry_mut(&mut self, field: Field) -> &mut String {
        &mut self.entries[field.index()]
    }

    pub fn set_entry(&mut self, field: Field, value: impl Into<String>) {
        self.entries[field.index()] = value.into();
    }

    /// `(name, price, stock)` as typed.
    pub fn entries(&self) -> (&str, &str, &str) {
        (&self.entries[0], &self.entries[1], &self.entries[2])
    }

    pub fn clear_entries(&mut self) {
        for entry in &mut self.entries {
            entry.clear();
        }
    }

    // =========================================================================
    // List
    // =========================================================================

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    /// Replaces the displayed rows. Any selection is dropped.
    pub fn set_rows(&mut self, rows: Vec<Product>) {
        self.rows = rows;
        self.selected = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Id of the selected row, if any.
    pub fn selected_id(&self) -> Option<i64> {
        self.selected().map(|p| p.id)
    }

    /// Selects row `index` and copies its values into the entries.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(product) = self.rows.get(index) else {
            return false;
        };
        self.entries = product.entry_values();
        self.selected = Some(index);
        true
    }

    /// Moves the selection down one row; from no selection, selects the first.
    pub fn select_next(&mut self) -> bool {
        let next = match self.selected {
            Some(i) => i + 1,
            None => 0,
        };
        self.select(next)
    }

    /// Moves the selection up one row; from no selection, selects the last.
    pub fn select_previous(&mut self) -> bool {
        let previous = match self.selected {
            Some(0) => return false,
            Some(i) => i - 1,
            None => match self.rows.len().checked_sub(1) {
                Some(last) => last,
                None => return false,
            },
        };
        self.select(previous)
    }
}
