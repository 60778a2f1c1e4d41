//! In-process stylesheet.

use super::rule::CssRule;
use super::StyleSheet;
use crate::error::SheetError;

/// A stylesheet kept in memory.
///
/// Each inserted rule is parsed and stored in canonical form, so
/// [`rule_text`](StyleSheet::rule_text) reports normalized text rather than
/// the string that was inserted.
///
/// # Example
///
/// ```rust
/// use loudo_styled::{MemorySheet, StyleSheet};
///
/// let mut sheet = MemorySheet::new();
/// sheet.insert_rule("body { background:black}", 0).unwrap();
/// assert_eq!(sheet.rule_text(0).unwrap(), "body {background: black;}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySheet {
    rules: Vec<CssRule>,
}

impl MemorySheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed rule at `index`.
    pub fn get(&self, index: usize) -> Option<&CssRule> {
        self.rules.get(index)
    }

    /// Canonical text of every rule, in sheet order.
    pub fn rules(&self) -> Vec<String> {
        self.rules.iter().map(ToString::to_string).collect()
    }
}

impl StyleSheet for MemorySheet {
    fn len(&self) -> usize {
        self.rules.len()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<usize, SheetError> {
        if index > self.rules.len() {
            return Err(SheetError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        let parsed = CssRule::parse(rule)?;
        self.rules.insert(index, parsed);
        Ok(index)
    }

    fn rule_text(&self, index: usize) -> Option<String> {
        self.rules.get(index).map(ToString::to_string)
    }

    fn delete_rule(&mut self, index: usize) -> Result<(), SheetError> {
        if index >= self.rules.len() {
            return Err(SheetError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        self.rules.remove(index);
        Ok(())
    }
}
