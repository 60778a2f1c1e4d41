//! The rule registry.
//!
//! [`Registry`] mints unique class names, builds rule text around them and
//! appends that text to a single style container. It owns:
//!
//! - the name counter, shared by every allocation regardless of base name
//! - the log flag and the sink that receives `"loudo-styled: "` lines
//! - a handle to the [`StyleElement`] it writes to (not the sheet's lifecycle)
//!
//! Rules are only ever appended. The single removal path is [`Registry::clear`],
//! which also resets the counter, so replaying the same calls after a clear
//! reproduces the same names and rules.

use std::fmt;

use crate::config::RegistryConfig;
use crate::document::{Document, StyleElement, STYLE_ELEMENT_ID};
use crate::error::StyleError;
use crate::sheet::{MemorySheet, StyleSheet};
use crate::styled::Styled;

/// Prefix of every rule log line.
pub const LOG_PREFIX: &str = "loudo-styled: ";

/// Receives one line per inserted rule while logging is on.
pub type LogSink = Box<dyn FnMut(&str)>;

/// Registry of generated CSS rules.
///
/// # Example
///
/// ```rust
/// use loudo_styled::{Document, Registry};
///
/// let mut doc = Document::new();
/// let mut registry = Registry::attach(&mut doc);
///
/// let button = registry.styled("button", "padding: 4px;").unwrap();
/// button.with(&mut registry, ":hover", "color: red;").unwrap();
///
/// assert_eq!(button.class_name(), "button-1");
/// assert_eq!(
///     registry.element().css_rules(),
///     vec![".button-1 {padding: 4px;}", ".button-1:hover {color: red;}"],
/// );
/// ```
pub struct Registry<S: StyleSheet = MemorySheet> {
    element: StyleElement<S>,
    counter: u64,
    log: bool,
    sink: LogSink,
}

impl<S: StyleSheet + Default> Registry<S> {
    /// Attaches to the document's `loudo-styled` container, creating it if needed.
    pub fn attach(document: &mut Document<S>) -> Self {
        Self::new(document.attach_style(STYLE_ELEMENT_ID))
    }

    /// Attaches to the container named by `config` and applies its log flag.
    pub fn from_config(document: &mut Document<S>, config: &RegistryConfig) -> Self {
        let mut registry = Self::new(document.attach_style(&config.element_id));
        registry.set_log(config.log);
        registry
    }
}

impl<S: StyleSheet> Registry<S> {
    /// Creates a registry writing to `element`, with logging off.
    pub fn new(element: StyleElement<S>) -> Self {
        Self {
            element,
            counter: 0,
            log: false,
            sink: Box::new(default_sink),
        }
    }

    /// The style container this registry writes to.
    pub fn element(&self) -> &StyleElement<S> {
        &self.element
    }

    /// The value of the last allocated ordinal; `0` right after creation or
    /// [`clear`](Self::clear).
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Turns rule logging on or off for subsequent insertions.
    pub fn set_log(&mut self, enabled: bool) {
        self.log = enabled;
    }

    /// Returns `true` while inserted rules are logged.
    pub fn is_logging(&self) -> bool {
        self.log
    }

    /// Replaces the sink that receives rule log lines.
    ///
    /// The default sink forwards lines to the `log` facade at info level,
    /// under the `loudo_styled` target.
    pub fn set_log_sink(&mut self, sink: impl FnMut(&str) + 'static) {
        self.sink = Box::new(sink);
    }

    /// Bumps the counter and returns its new value.
    pub fn next_suffix(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Allocates a unique name of the form `base-N`.
    ///
    /// The counter is shared across bases, so the suffix alone is unique.
    pub fn auto_name(&mut self, base: &str) -> String {
        let suffix = self.next_suffix();
        format!("{}-{}", base, suffix)
    }

    /// Creates a class named after `tag` and inserts its rule.
    ///
    /// # Errors
    ///
    /// Fails with [`StyleError::Unavailable`] if the container lost its sheet,
    /// or [`StyleError::Rejected`] if the sheet refused the rule.
    pub fn styled(&mut self, tag: &str, css: &str) -> Result<Styled, StyleError> {
        self.styled_named(tag, tag, css)
    }

    /// Like [`styled`](Self::styled), but derives the class from `name`.
    pub fn styled_named(&mut self, tag: &str, name: &str, css: &str) -> Result<Styled, StyleError> {
        let class_name = self.auto_name(name);
        self.insert(&class_rule(&class_name, "", css))?;
        Ok(Styled::new(tag, class_name))
    }

    /// Inserts `selector { css }` with no generated name.
    pub fn add_rule(&mut self, selector: &str, css: &str) -> Result<(), StyleError> {
        self.insert(&format!("{} {{ {}}}", selector, css))
    }

    /// Registers a keyframes rule under a generated name and a class that
    /// plays it.
    ///
    /// The last whitespace-separated token of `animation` is the animation
    /// name. It is replaced by the generated name in both rules, which is
    /// returned.
    ///
    /// ```rust
    /// use loudo_styled::{Document, Registry};
    ///
    /// let mut doc = Document::new();
    /// let mut registry = Registry::attach(&mut doc);
    /// let name = registry
    ///     .keyframed("1s ease-out fadeOut", "from{opacity:0}to{opacity:1}")
    ///     .unwrap();
    /// assert_eq!(name, "fadeOut-1");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`StyleError::InvalidAnimation`] when `animation` has no
    /// tokens; nothing is allocated or inserted in that case.
    pub fn keyframed(&mut self, animation: &str, keyframes: &str) -> Result<String, StyleError> {
        let tokens: Vec<&str> = animation.split_whitespace().collect();
        let (name, timing) = match tokens.split_last() {
            Some(split) => split,
            None => return Err(StyleError::InvalidAnimation(animation.to_string())),
        };

        let full_name = self.auto_name(name);
        let shorthand = timing
            .iter()
            .copied()
            .chain([full_name.as_str()])
            .collect::<Vec<_>>()
            .join(" ");

        self.insert(&format!("@keyframes {} {{{}}}", full_name, keyframes))?;
        self.insert(&format!(".{} {{ animation: {}; }}", full_name, shorthand))?;
        Ok(full_name)
    }

    /// Resets the counter and deletes every rule in the sheet.
    ///
    /// Does nothing to the sheet if the container has been detached. Stops at
    /// the first rule the sheet refuses to delete, logging a warning.
    pub fn clear(&mut self) {
        self.counter = 0;
        let drained = self.element.with_sheet(|sheet| {
            let mut count = 0;
            while !sheet.is_empty() {
                if let Err(err) = sheet.delete_rule(0) {
                    return Err((count, err));
                }
                count += 1;
            }
            Ok(count)
        });
        let id = self.element.id();
        match drained {
            Some(Ok(count)) => log::debug!("cleared {} rules from #{}", count, id),
            Some(Err((count, err))) => {
                log::warn!("stopped clearing #{} after {} rules: {}", id, count, err)
            }
            None => log::warn!("#{} has no sheet, nothing to clear", id),
        }
    }

    /// Appends `rule` to the end of the sheet.
    pub(crate) fn insert(&mut self, rule: &str) -> Result<(), StyleError> {
        let inserted = self
            .element
            .with_sheet(|sheet| {
                let index = sheet.insert_rule(rule, sheet.len())?;
                Ok::<_, StyleError>(sheet.rule_text(index))
            })
            .ok_or(StyleError::Unavailable)??;

        if self.log {
            let line = format!("{}{}", LOG_PREFIX, inserted.unwrap_or_default());
            (self.sink)(&line);
        }
        Ok(())
    }
}

impl<S: StyleSheet> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("element", &self.element)
            .field("counter", &self.counter)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

/// Builds `.{class_name}{suffix} { css}`.
pub(crate) fn class_rule(class_name: &str, suffix: &str, css: &str) -> String {
    format!(".{}{} {{ {}}}", class_name, suffix, css)
}

fn default_sink(line: &str) {
    log::info!(target: "loudo_styled", "{}", line);
}
