//! One-shot fade-in for elements entering the viewport.
//!
//! The host owns the actual viewport observer (configured from
//! [`RevealAnimator::options`]) and forwards its entries here.

use tracing::debug;

use crate::config::RevealConfig;
use crate::dom::DocumentModel;

/// One intersection report from the host's observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Observer settings for the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Debug, Clone)]
pub struct RevealAnimator<E> {
    config: RevealConfig,
    watched: Vec<E>,
}

impl<E: Clone + PartialEq> RevealAnimator<E> {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            watched: Vec::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.config.threshold,
            root_margin: self.config.root_margin.clone(),
        }
    }

    /// Start watching every matching element not yet revealed or watched.
    /// Returns the newly watched elements for the host to observe.
    pub fn watch<D: DocumentModel<Element = E>>(&mut self, doc: &D) -> Vec<E> {
        let fresh: Vec<E> = doc
            .query_all(&self.config.selector)
            .into_iter()
            .filter(|el| !doc.has_class(el, &self.config.visible_class))
            .filter(|el| !self.watched.contains(el))
            .collect();
        self.watched.extend(fresh.iter().cloned());
        debug!(watched = self.watched.len(), "reveal watch");
        fresh
    }

    /// Handle one entry. Returns `true` when the host should stop observing
    /// the target. Reveals only once the visible ratio reaches the threshold.
    pub fn handle<D: DocumentModel<Element = E>>(&mut self, doc: &mut D, entry: &RevealEntry<E>) -> bool {
        if !entry.is_intersecting || entry.ratio < self.config.threshold {
            return false;
        }
        let Some(position) = self.watched.iter().position(|el| *el == entry.target) else {
            return false;
        };
        self.watched.remove(position);
        doc.add_class(&entry.target, &self.config.visible_class);
        debug!(ratio = entry.ratio, remaining = self.watched.len(), "revealed");
        true
    }

    pub fn watched(&self) -> usize {
        self.watched.len()
    }

    /// Forget every watched element.
    pub fn clear(&mut self) -> Vec<E> {
        std::mem::take(&mut self.watched)
    }
}
