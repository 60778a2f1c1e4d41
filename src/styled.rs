//! Handles returned by [`Registry::styled`](crate::Registry::styled).

use crate::element::{Element, ElementBuilder, ElementFactory, Elements};
use crate::error::StyleError;
use crate::registry::{class_rule, Registry};
use crate::sheet::StyleSheet;

/// A generated class bound to a tag.
///
/// The handle builds elements carrying its class and appends companion rules
/// (state or variant selectors) under the same class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    tag: String,
    class_name: String,
}

impl Styled {
    pub(crate) fn new(tag: &str, class_name: String) -> Self {
        Self {
            tag: tag.to_string(),
            class_name,
        }
    }

    /// The generated class name, without a leading dot.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The tag elements are built with.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The class selector, `.` followed by the class name.
    pub fn selector(&self) -> String {
        format!(".{}", self.class_name)
    }

    /// Builds an empty element with this class.
    pub fn el(&self) -> Element {
        self.create("", &[])
    }

    /// Builds an element with this class, inner text and attributes.
    ///
    /// Attributes whose value is `None` are not set.
    pub fn create(&self, inner_text: &str, attributes: &[(&str, Option<&str>)]) -> Element {
        self.create_with(&Elements, inner_text, attributes)
    }

    /// Like [`create`](Self::create), with a caller-supplied factory.
    pub fn create_with<F: ElementFactory>(
        &self,
        factory: &F,
        inner_text: &str,
        attributes: &[(&str, Option<&str>)],
    ) -> F::Element {
        factory
            .create(&self.tag)
            .bind_class(&self.class_name)
            .set_inner_text(inner_text)
            .set_attrs(attributes)
    }

    /// Appends `.{class}{selector} { css}` after every rule inserted so far.
    ///
    /// The original class rule is left untouched; the companion rule stays
    /// until the registry is cleared.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::styled`].
    pub fn with<S: StyleSheet>(
        &self,
        registry: &mut Registry<S>,
        selector: &str,
        css: &str,
    ) -> Result<(), StyleError> {
        registry.insert(&class_rule(&self.class_name, selector, css))
    }
}
