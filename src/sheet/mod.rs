//! Host stylesheet abstraction.
//!
//! The registry never touches CSS text after building it; it hands each rule
//! to a [`StyleSheet`] and reads back whatever the sheet reports. This module
//! provides:
//!
//! - [`StyleSheet`]: the ordered, index-addressed rule list the registry writes to
//! - [`MemorySheet`]: an in-process sheet that canonicalizes rules the way a
//!   browser CSSOM reports `cssText`
//! - [`CssRule`] / [`Declaration`]: the rule model behind [`MemorySheet`]

mod memory;
mod rule;

pub use memory::MemorySheet;
pub use rule::{CssRule, Declaration};

use crate::error::SheetError;

/// An ordered, mutable sequence of CSS rules.
///
/// Indices shift down after a deletion, so draining a sheet means deleting
/// index 0 until [`len`](StyleSheet::len) reaches zero.
pub trait StyleSheet {
    /// Number of rules currently in the sheet.
    fn len(&self) -> usize;

    /// Returns `true` when the sheet holds no rules.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `rule` at `index`, returning the index it landed at.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Syntax`] if the sheet cannot accept the text and
    /// [`SheetError::IndexOutOfBounds`] if `index > len()`.
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<usize, SheetError>;

    /// The canonical text of the rule at `index`.
    fn rule_text(&self, index: usize) -> Option<String>;

    /// Removes the rule at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::IndexOutOfBounds`] if `index >= len()`.
    fn delete_rule(&mut self, index: usize) -> Result<(), SheetError>;
}
