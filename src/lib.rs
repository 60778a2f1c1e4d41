//! # Loudo Styled - runtime CSS rules with generated class names
//!
//! `loudo-styled` creates CSS classes and keyframe animations on demand,
//! appends their rules to a single style container, and hands back small
//! handles for stamping elements with the generated class.
//!
//! ## Core Concepts
//!
//! - [`Registry`]: Allocates unique names and appends rules in call order
//! - [`Styled`]: A generated class bound to a tag, with companion-rule support
//! - [`StyleSheet`]: The ordered rule list the registry writes to
//! - [`Document`] / [`StyleElement`]: The host document and its `<style>` container
//! - [`ElementFactory`]: Builds elements carrying a generated class
//!
//! ## Quick Start
//!
//! ```rust
//! use loudo_styled::{Document, Registry};
//!
//! let mut doc = Document::new();
//! let mut registry = Registry::attach(&mut doc);
//!
//! let card = registry.styled("div", "padding: 8px;").unwrap();
//! card.with(&mut registry, ".dark", "background: black;").unwrap();
//! registry.add_rule("body", "margin: 0").unwrap();
//! let fade = registry.keyframed("300ms ease-in fade", "from{opacity:0}").unwrap();
//!
//! let el = card.create("hello", &[("role", Some("note")), ("title", None)]);
//! assert_eq!(el.class_name(), "div-1");
//! assert_eq!(el.attr("title"), None);
//! assert_eq!(fade, "fade-2");
//!
//! assert_eq!(
//!     doc.style_by_id("loudo-styled").unwrap().css_rules(),
//!     vec![
//!         ".div-1 {padding: 8px;}",
//!         ".div-1.dark {background: black;}",
//!         "body {margin: 0;}",
//!         "@keyframes fade-2 { from {opacity: 0;} }",
//!         ".fade-2 {animation: 300ms ease-in fade-2;}",
//!     ],
//! );
//! ```
//!
//! ## Naming
//!
//! Every allocation bumps one counter shared by all bases, producing
//! `base-N`. [`Registry::clear`] resets the counter and empties the sheet, so
//! replaying the same calls afterwards yields the same names and rules.
//!
//! ## Logging
//!
//! With [`Registry::set_log`] on, each insertion emits one line prefixed with
//! [`LOG_PREFIX`] holding the rule text as the sheet reports it. Lines go to
//! the `log` facade unless [`Registry::set_log_sink`] redirects them.

mod config;
mod document;
mod element;
mod error;
mod registry;
mod sheet;
mod styled;

pub use config::RegistryConfig;
pub use document::{Document, StyleElement, STYLE_ELEMENT_ID};
pub use element::{Element, ElementBuilder, ElementFactory, Elements};
pub use error::{SheetError, StyleError};
pub use registry::{LogSink, Registry, LOG_PREFIX};
pub use sheet::{CssRule, Declaration, MemorySheet, StyleSheet};
pub use styled::Styled;
