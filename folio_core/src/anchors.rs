//! Smooth scrolling for in-page anchors.

use crate::config::AnchorConfig;
use crate::dom::DocumentModel;

#[derive(Debug, Clone)]
pub struct AnchorRouter {
    config: AnchorConfig,
}

impl AnchorRouter {
    pub fn new(config: AnchorConfig) -> Self {
        Self { config }
    }

    /// The fragment anchor the click landed on, if any.
    pub fn anchor_for<D: DocumentModel>(&self, doc: &D, target: &D::Element) -> Option<D::Element> {
        doc.closest(target, &self.config.anchor_selector)
    }

    /// Scroll position that puts the anchor's target just below the fixed
    /// header. `None` when the fragment is empty or names no element.
    pub fn scroll_target<D: DocumentModel>(&self, doc: &D, anchor: &D::Element) -> Option<f64> {
        let href = doc.attribute(anchor, "href")?;
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let target = doc.element_by_id(id)?;
        Some(doc.offset_top(&target) - self.config.header_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn resolves_fragment_with_header_offset() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_id();
        let link = doc.append_with(body, "a", &[("href", "#work")]);
        let label = doc.append_element(link, "span");
        let work = doc.append_with(body, "section", &[("id", "work")]);
        doc.set_offset_top(work, 1200.0);

        let router = AnchorRouter::new(AnchorConfig::default());
        let anchor = router.anchor_for(&doc, &label).expect("anchor");
        assert_eq!(anchor, link);
        assert_eq!(router.scroll_target(&doc, &anchor), Some(1120.0));
    }

    #[test]
    fn missing_or_empty_fragment_is_noop() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_id();
        let bare = doc.append_with(body, "a", &[("href", "#")]);
        let dangling = doc.append_with(body, "a", &[("href", "#nowhere")]);
        let external = doc.append_with(body, "a", &[("href", "https://example.com")]);

        let router = AnchorRouter::new(AnchorConfig::default());
        assert_eq!(router.scroll_target(&doc, &bare), None);
        assert_eq!(router.scroll_target(&doc, &dangling), None);
        assert_eq!(router.anchor_for(&doc, &external), None);
    }
}
