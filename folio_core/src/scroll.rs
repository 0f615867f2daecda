//! Scroll-driven effects: the "scrolled" top bar and active link highlight.

use tracing::trace;

use crate::config::ScrollConfig;
use crate::dom::DocumentModel;

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: ScrollConfig,
}

impl ScrollEffects {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// Strictly past the threshold.
    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.config.scrolled_threshold
    }

    /// The last section, in document order, whose top minus the margin has
    /// been scrolled past. Later sections win when several qualify.
    pub fn current_section<'a>(&self, offset: f64, sections: &'a [(String, f64)]) -> Option<&'a str> {
        let mut current = None;
        for (id, top) in sections {
            if offset >= top - self.config.section_margin {
                current = Some(id.as_str());
            }
        }
        current
    }

    /// Apply both effects for `offset`. Returns the current section id.
    pub fn apply<D: DocumentModel>(&self, doc: &mut D, offset: f64) -> Option<String> {
        if let Some(top_nav) = doc.query_one(&self.config.top_nav_selector) {
            doc.set_class(&top_nav, &self.config.scrolled_class, self.is_scrolled(offset));
        }

        let sections: Vec<(String, f64)> = doc
            .query_all(&self.config.section_selector)
            .into_iter()
            .filter_map(|section| {
                let id = doc.id_of(&section).filter(|id| !id.is_empty())?;
                Some((id, doc.offset_top(&section)))
            })
            .collect();
        let current = self.current_section(offset, &sections).map(str::to_string);
        let target = current.as_ref().map(|id| format!("#{id}"));

        for link in doc.query_all(&self.config.link_selector) {
            let active = target.is_some() && doc.attribute(&link, "href") == target;
            doc.set_class(&link, &self.config.active_class, active);
        }

        trace!(offset, current = current.as_deref(), "scroll effects");
        current
    }
}
