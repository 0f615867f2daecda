//! The capability interface every behaviour is written against.
//!
//! A host implements [`DocumentModel`] once: the landing page over `web-sys`,
//! the tests over [`crate::memory::MemoryDocument`]. Behaviour code never
//! touches the browser directly.

use crate::counter::CounterOverlay;

/// One piece of a tokenized text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Whitespace, kept verbatim as a plain text node.
    Space(String),
    /// A word wrapped in a token span. `color` is 1-based.
    Word { text: String, color: usize },
}

impl Run {
    pub fn text(&self) -> &str {
        match self {
            Run::Space(text) | Run::Word { text, .. } => text,
        }
    }

    /// Class attribute of the span wrapping this run, if any.
    pub fn class_name(&self, token_class: &str) -> Option<String> {
        match self {
            Run::Space(_) => None,
            Run::Word { color, .. } => Some(format!("{token_class} {token_class}-{color}")),
        }
    }
}

/// Read and mutate the rendered page.
///
/// Element handles are cheap clones compared by identity. Selector arguments
/// are CSS selectors; implementations may support only the subset the page
/// configuration uses.
pub trait DocumentModel {
    type Element: Clone + PartialEq;
    type Text;
    /// Opaque copy of an element's inner content.
    type Snapshot;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    /// All matching elements in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn query_one(&self, selector: &str) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    /// The element itself or its nearest ancestor matching `selector`.
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);
    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    fn id_of(&self, element: &Self::Element) -> Option<String> {
        self.attribute(element, "id")
    }

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn add_class(&mut self, element: &Self::Element, class: &str);
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    fn set_class(&mut self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Inclusive: an element contains itself.
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    /// Distance from the top of the document, in CSS pixels.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Descendant text nodes of `element`, in document order.
    fn text_leaves(&self, element: &Self::Element) -> Vec<Self::Text>;
    fn text_of(&self, text: &Self::Text) -> String;
    fn text_parent(&self, text: &Self::Text) -> Option<Self::Element>;

    /// Replace `text` in place with one node per run.
    fn replace_text(&mut self, text: &Self::Text, runs: &[Run], token_class: &str);

    fn snapshot(&self, element: &Self::Element) -> Self::Snapshot;
    fn restore(&mut self, element: &Self::Element, snapshot: Self::Snapshot);

    /// Append the counter overlay to `<body>`.
    fn mount_overlay(&mut self, overlay: &CounterOverlay) -> Option<Self::Element>;
    fn remove_element(&mut self, element: &Self::Element);

    /// Disable page scrolling while the mobile menu is open.
    fn set_scroll_lock(&mut self, locked: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_class_name_uses_color() {
        let run = Run::Word {
            text: "pages".into(),
            color: 3,
        };
        assert_eq!(run.class_name("token").as_deref(), Some("token token-3"));
        assert_eq!(run.text(), "pages");
    }

    #[test]
    fn space_has_no_class() {
        assert_eq!(Run::Space("  ".into()).class_name("token"), None);
    }
}
