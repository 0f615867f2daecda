//! The page controller: one owner for every behaviour on the page.
//!
//! Lifecycle, in the order a host drives it:
//!
//! 1. [`PageController::new`] when the script loads
//! 2. [`PageController::prepare`] before the first render
//! 3. [`PageController::content_ready`] once the markup is in the document
//! 4. [`PageController::on_load`] when the window `load` event fires
//! 5. event methods (`on_scroll`, `on_click`, `on_key`, `on_intersection`)
//! 6. [`PageController::teardown`] when the page goes away

use tracing::debug;

use crate::anchors::AnchorRouter;
use crate::config::PageConfig;
use crate::debounce::{Debounce, Edge};
use crate::dom::DocumentModel;
use crate::images::promote_deferred;
use crate::nav::{NavAction, NavController};
use crate::reveal::{ObserverOptions, RevealAnimator, RevealEntry};
use crate::scroll::ScrollEffects;
use crate::storage::FlagStore;
use crate::token_mode::{TokenMode, Transition};

/// What the host must do after a click.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub nav: NavAction,
    /// Suppress the browser's own navigation.
    pub prevent_default: bool,
    /// Smooth-scroll the window to this vertical offset.
    pub scroll_to: Option<f64>,
}

pub struct PageController<D: DocumentModel, S: FlagStore> {
    config: PageConfig,
    document: D,
    store: S,
    nav: NavController,
    scroll: ScrollEffects,
    anchors: AnchorRouter,
    reveal: RevealAnimator<D::Element>,
    token_mode: TokenMode<D>,
    scroll_debounce: Option<Debounce>,
}

impl<D: DocumentModel, S: FlagStore> PageController<D, S> {
    pub fn new(config: PageConfig, document: D, store: S) -> Self {
        let scroll_debounce = config
            .scroll
            .debounce
            .then(|| Debounce::new(config.scroll.debounce_ms, Edge::Leading));
        Self {
            nav: NavController::new(config.nav.clone()),
            scroll: ScrollEffects::new(config.scroll.clone()),
            anchors: AnchorRouter::new(config.anchors.clone()),
            reveal: RevealAnimator::new(config.reveal.clone()),
            token_mode: TokenMode::new(config.token_mode.clone()),
            scroll_debounce,
            config,
            document,
            store,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (D, S) {
        (self.document, self.store)
    }

    pub fn observer_options(&self) -> ObserverOptions {
        self.reveal.options()
    }

    pub fn is_token_mode_active(&self) -> bool {
        self.token_mode.is_active()
    }

    pub fn token_snapshot_len(&self) -> usize {
        self.token_mode.snapshot_len()
    }

    pub fn is_menu_open(&self) -> bool {
        self.nav.is_open(&self.document)
    }

    /// Pre-render: flag the root if token mode is about to be restored.
    pub fn prepare(&mut self) -> bool {
        self.token_mode.prepare(&mut self.document, &self.store)
    }

    /// Markup is in place: restore token mode and start watching reveal
    /// targets. Returns the elements the host should observe.
    pub fn content_ready(&mut self) -> Vec<D::Element> {
        self.token_mode.restore(&mut self.document, &mut self.store);
        self.reveal.watch(&self.document)
    }

    /// Window `load`: promote deferred images.
    pub fn on_load(&mut self) -> usize {
        promote_deferred(&mut self.document, &self.config.images)
    }

    /// Returns `false` when the debouncer swallowed the event.
    pub fn on_scroll(&mut self, offset: f64, now_ms: f64) -> bool {
        if let Some(debounce) = self.scroll_debounce.as_mut() {
            if !debounce.call(now_ms) {
                return false;
            }
        }
        self.scroll.apply(&mut self.document, offset);
        true
    }

    /// Route a click from the document-level listener.
    pub fn on_click(&mut self, target: &D::Element) -> ClickOutcome {
        let nav = self.nav.on_click(&mut self.document, target);
        let anchor = self.anchors.anchor_for(&self.document, target);
        let scroll_to = anchor
            .as_ref()
            .and_then(|anchor| self.anchors.scroll_target(&self.document, anchor));
        if anchor.is_some() {
            debug!(?scroll_to, "anchor click");
        }
        ClickOutcome {
            nav,
            prevent_default: anchor.is_some(),
            scroll_to,
        }
    }

    pub fn on_key(&mut self, key: &str) -> Option<Transition> {
        self.token_mode.on_key(&mut self.document, &mut self.store, key)
    }

    pub fn toggle_token_mode(&mut self) -> Transition {
        self.token_mode.toggle(&mut self.document, &mut self.store)
    }

    /// Returns `true` when the host should stop observing the target.
    pub fn on_intersection(&mut self, entry: RevealEntry<D::Element>) -> bool {
        self.reveal.handle(&mut self.document, &entry)
    }

    /// Restore the page and drop in-memory state. The persisted flag is kept.
    /// Returns the elements that were still being watched.
    pub fn teardown(&mut self) -> Vec<D::Element> {
        self.token_mode.teardown(&mut self.document);
        self.nav.close(&mut self.document);
        if let Some(debounce) = self.scroll_debounce.as_mut() {
            *debounce = Debounce::new(self.config.scroll.debounce_ms, Edge::Leading);
        }
        self.reveal.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;
    use crate::storage::MemoryFlagStore;

    #[test]
    fn debounced_scroll_skips_bursts() {
        let mut config = PageConfig::default();
        config.scroll.debounce = true;
        let mut page = PageController::new(config, MemoryDocument::new(), MemoryFlagStore::default());
        assert!(page.on_scroll(0.0, 0.0));
        assert!(!page.on_scroll(120.0, 5.0));
        assert!(page.on_scroll(120.0, 40.0));
    }

    #[test]
    fn undebounced_scroll_always_applies() {
        let mut page = PageController::new(PageConfig::default(), MemoryDocument::new(), MemoryFlagStore::default());
        assert!(page.on_scroll(0.0, 0.0));
        assert!(page.on_scroll(1.0, 0.0));
    }

    #[test]
    fn observer_options_follow_config() {
        let page = PageController::new(PageConfig::default(), MemoryDocument::new(), MemoryFlagStore::default());
        assert_eq!(page.observer_options().threshold, 0.1);
    }
}
