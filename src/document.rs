//! Host document and its `<style>` containers.
//!
//! A [`Document`] holds the style containers appended to its head. Each
//! [`StyleElement`] is a shared handle: the document and any registry writing
//! to it see the same sheet. Removing a container from the document detaches
//! its sheet, after which every holder of the handle observes it as unusable.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::sheet::{MemorySheet, StyleSheet};

/// Identifier of the style container the registry attaches to.
pub const STYLE_ELEMENT_ID: &str = "loudo-styled";

/// A `<style>` container with an optional stylesheet.
pub struct StyleElement<S = MemorySheet> {
    id: Rc<str>,
    sheet: Rc<RefCell<Option<S>>>,
}

impl<S> StyleElement<S> {
    /// Creates an attached container around `sheet`.
    pub fn new(id: &str, sheet: S) -> Self {
        Self {
            id: Rc::from(id),
            sheet: Rc::new(RefCell::new(Some(sheet))),
        }
    }

    /// Creates a container that has no sheet.
    pub fn detached(id: &str) -> Self {
        Self {
            id: Rc::from(id),
            sheet: Rc::new(RefCell::new(None)),
        }
    }

    /// The container's element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` while the container still has a sheet.
    pub fn is_attached(&self) -> bool {
        self.sheet.borrow().is_some()
    }

    /// Runs `f` against the sheet, or returns `None` if there is none.
    pub fn with_sheet<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.sheet.borrow_mut().as_mut().map(f)
    }

    /// Drops the sheet from this container, returning it.
    pub fn detach(&self) -> Option<S> {
        self.sheet.borrow_mut().take()
    }

    /// Returns `true` if both handles refer to the same container.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sheet, &other.sheet)
    }
}

impl<S: StyleSheet> StyleElement<S> {
    /// Canonical text of every rule in the sheet; empty when detached.
    pub fn css_rules(&self) -> Vec<String> {
        self.with_sheet(|sheet| {
            (0..sheet.len())
                .filter_map(|i| sheet.rule_text(i))
                .collect()
        })
        .unwrap_or_default()
    }
}

impl<S> Clone for StyleElement<S> {
    fn clone(&self) -> Self {
        Self {
            id: Rc::clone(&self.id),
            sheet: Rc::clone(&self.sheet),
        }
    }
}

impl<S> fmt::Debug for StyleElement<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleElement")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A document head holding style containers in append order.
#[derive(Debug)]
pub struct Document<S = MemorySheet> {
    head: Vec<StyleElement<S>>,
}

impl Document {
    /// Creates a document with an empty head whose containers hold a
    /// [`MemorySheet`]. Use [`Document::default`] for other sheet types.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Document<S> {
    /// Returns the container with `id`, creating and appending it first if
    /// the head has none.
    pub fn attach_style(&mut self, id: &str) -> StyleElement<S>
    where
        S: Default,
    {
        if let Some(existing) = self.style_by_id(id) {
            return existing;
        }
        let element = StyleElement::new(id, S::default());
        self.head.push(element.clone());
        element
    }

    /// Returns the container with `id`, if it is in the head.
    pub fn style_by_id(&self, id: &str) -> Option<StyleElement<S>> {
        self.head.iter().find(|el| el.id() == id).cloned()
    }

    /// Removes the container with `id` from the head and detaches its sheet.
    pub fn remove_style(&mut self, id: &str) -> Option<StyleElement<S>> {
        let pos = self.head.iter().position(|el| el.id() == id)?;
        let element = self.head.remove(pos);
        element.detach();
        Some(element)
    }

    /// Number of style containers in the head.
    pub fn style_count(&self) -> usize {
        self.head.len()
    }
}

impl<S> Default for Document<S> {
    fn default() -> Self {
        Self { head: Vec::new() }
    }
}
