//! Element construction for styled handles.
//!
//! [`Styled`](crate::Styled) handles do not build elements themselves; they
//! delegate to an [`ElementFactory`]. [`Elements`] is the in-memory default,
//! producing [`Element`] values that can be inspected directly.

/// A buildable element.
pub trait ElementBuilder: Sized {
    /// Adds `class_name` to the element's class list.
    fn bind_class(self, class_name: &str) -> Self;

    fn set_inner_text(self, text: &str) -> Self;

    /// Sets one attribute, replacing any previous value.
    fn set_attr(self, name: &str, value: &str) -> Self;

    /// Sets every attribute that has a value. Entries whose value is `None`
    /// are skipped rather than set to an empty string.
    fn set_attrs(self, attributes: &[(&str, Option<&str>)]) -> Self {
        attributes
            .iter()
            .fold(self, |element, (name, value)| match value {
                Some(value) => element.set_attr(name, value),
                None => element,
            })
    }
}

/// Produces elements for a tag name.
pub trait ElementFactory {
    type Element: ElementBuilder;

    fn create(&self, tag: &str) -> Self::Element;
}

/// An in-memory element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    inner_text: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The space-separated class list, as the `className` property reports it.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    pub fn inner_text(&self) -> &str {
        &self.inner_text
    }

    /// Returns the value of attribute `name`, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in the order they were first set.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

impl ElementBuilder for Element {
    fn bind_class(mut self, class_name: &str) -> Self {
        if !self.has_class(class_name) {
            self.classes.push(class_name.to_string());
        }
        self
    }

    fn set_inner_text(mut self, text: &str) -> Self {
        self.inner_text = text.to_string();
        self
    }

    fn set_attr(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }
}

/// Factory for in-memory [`Element`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elements;

impl ElementFactory for Elements {
    type Element = Element;

    fn create(&self, tag: &str) -> Element {
        Element::new(tag)
    }
}
