//! Token mode: the page re-rendered as colored word tokens.
//!
//! Typing `token` toggles it, Escape leaves it, and the state survives a
//! reload through the persisted flag. While active, every text-bearing
//! element keeps a snapshot of its original content so leaving restores the
//! page exactly.

use tracing::{debug, info};

use crate::config::TokenModeConfig;
use crate::counter::CounterOverlay;
use crate::dom::{DocumentModel, Run};
use crate::storage::{FlagStore, PersistedFlag};
use crate::tokenizer::{is_tokenizable, split_runs};

/// Direction of a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enabled,
    Disabled,
}

/// Rolling buffer of the most recently typed characters.
#[derive(Debug, Clone, Default)]
pub struct KeySequence {
    trigger: String,
    buffer: String,
}

impl KeySequence {
    pub fn new(trigger: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
            buffer: String::new(),
        }
    }

    /// Append a key name. Returns `true` (and clears the buffer) when the
    /// buffer spells the trigger.
    pub fn push(&mut self, key: &str) -> bool {
        self.buffer.push_str(&key.to_lowercase());
        let limit = self.trigger.chars().count();
        let len = self.buffer.chars().count();
        if len > limit {
            self.buffer = self.buffer.chars().skip(len - limit).collect();
        }
        if !self.trigger.is_empty() && self.buffer == self.trigger {
            self.buffer.clear();
            return true;
        }
        false
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

pub struct TokenMode<D: DocumentModel> {
    config: TokenModeConfig,
    flag: PersistedFlag,
    keys: KeySequence,
    active: bool,
    snapshots: Vec<(D::Element, D::Snapshot)>,
}

impl<D: DocumentModel> TokenMode<D> {
    pub fn new(config: TokenModeConfig) -> Self {
        Self {
            flag: PersistedFlag::new(&config.storage_key, &config.enabled_value),
            keys: KeySequence::new(&config.trigger),
            config,
            active: false,
            snapshots: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of elements currently holding a snapshot.
    pub fn snapshot_len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn tokenized_elements(&self) -> impl Iterator<Item = &D::Element> {
        self.snapshots.iter().map(|(element, _)| element)
    }

    /// Pre-render check: mark the root so styles can hide untokenized text
    /// until [`TokenMode::restore`] runs. Does not change state.
    pub fn prepare<S: FlagStore + ?Sized>(&self, doc: &mut D, store: &S) -> bool {
        if !self.flag.is_enabled(store) {
            return false;
        }
        if let Some(root) = doc.root() {
            doc.add_class(&root, &self.config.loading_class);
        }
        true
    }

    /// Post-parse check: enable when the persisted flag is set.
    pub fn restore<S: FlagStore + ?Sized>(&mut self, doc: &mut D, store: &mut S) -> bool {
        if !self.flag.is_enabled(store) {
            return false;
        }
        info!("[folio] restoring token mode");
        self.enable(doc, store);
        true
    }

    /// Feed one keydown.
    pub fn on_key<S: FlagStore + ?Sized>(&mut self, doc: &mut D, store: &mut S, key: &str) -> Option<Transition> {
        if self.keys.push(key) {
            return Some(self.toggle(doc, store));
        }
        if key == self.config.exit_key && self.active {
            return Some(self.toggle(doc, store));
        }
        None
    }

    pub fn toggle<S: FlagStore + ?Sized>(&mut self, doc: &mut D, store: &mut S) -> Transition {
        if self.active {
            self.disable(doc, store);
            Transition::Disabled
        } else {
            self.enable(doc, store);
            Transition::Enabled
        }
    }

    /// Tokenize every eligible element and show the counter. Safe to call
    /// while already active: tokenized elements are skipped and the counter
    /// is replaced. Returns the page's token count.
    pub fn enable<S: FlagStore + ?Sized>(&mut self, doc: &mut D, store: &mut S) -> usize {
        if let Some(body) = doc.body() {
            doc.add_class(&body, &self.config.active_class);
        }
        if let Some(root) = doc.root() {
            doc.remove_class(&root, &self.config.loading_class);
        }

        let overlay = doc.element_by_id(&self.config.counter_id);
        let mut words = 0;
        for element in doc.query_all(&self.config.text_selector) {
            if self.is_excluded(doc, &element, overlay.as_ref()) {
                continue;
            }
            let snapshot = doc.snapshot(&element);
            self.snapshots.push((element.clone(), snapshot));
            words += self.tokenize(doc, &element);
            doc.add_class(&element, &self.config.tokenized_class);
        }

        let count = self.render_counter(doc);
        self.active = true;
        self.flag.persist(store, true);
        debug!(words, count, elements = self.snapshots.len(), "token mode on");
        count
    }

    /// Put every snapshot back and drop the counter.
    pub fn disable<S: FlagStore + ?Sized>(&mut self, doc: &mut D, store: &mut S) {
        self.unwind(doc);
        self.flag.persist(store, false);
        debug!("token mode off");
    }

    /// Undo the page transformation and forget in-memory state, leaving the
    /// persisted flag alone so the next load restores token mode.
    pub fn teardown(&mut self, doc: &mut D) {
        self.unwind(doc);
        self.keys = KeySequence::new(&self.config.trigger);
    }

    fn unwind(&mut self, doc: &mut D) {
        if let Some(body) = doc.body() {
            doc.remove_class(&body, &self.config.active_class);
        }
        if let Some(root) = doc.root() {
            doc.remove_class(&root, &self.config.loading_class);
        }
        // Innermost elements were snapshotted last; restore them first.
        while let Some((element, snapshot)) = self.snapshots.pop() {
            doc.restore(&element, snapshot);
            doc.remove_class(&element, &self.config.tokenized_class);
        }
        if let Some(counter) = doc.element_by_id(&self.config.counter_id) {
            doc.remove_element(&counter);
        }
        self.active = false;
    }

    fn is_excluded(&self, doc: &D, element: &D::Element, overlay: Option<&D::Element>) -> bool {
        doc.has_class(element, &self.config.tokenized_class)
            || doc.has_class(element, &self.config.token_class)
            || overlay.is_some_and(|counter| doc.contains(counter, element))
    }

    /// Wrap the words of each qualifying text leaf. Returns the word count.
    fn tokenize(&self, doc: &mut D, element: &D::Element) -> usize {
        let leaves: Vec<(D::Text, String)> = doc
            .text_leaves(element)
            .into_iter()
            .filter(|leaf| {
                doc.text_parent(leaf)
                    .is_none_or(|parent| !doc.has_class(&parent, &self.config.token_class))
            })
            .map(|leaf| {
                let text = doc.text_of(&leaf);
                (leaf, text)
            })
            .filter(|(_, text)| is_tokenizable(text))
            .collect();

        let mut words = 0;
        for (leaf, text) in leaves {
            let runs = split_runs(&text, self.config.palette_size);
            words += runs.iter().filter(|run| matches!(run, Run::Word { .. })).count();
            doc.replace_text(&leaf, &runs, &self.config.token_class);
        }
        words
    }

    fn render_counter(&self, doc: &mut D) -> usize {
        if let Some(existing) = doc.element_by_id(&self.config.counter_id) {
            doc.remove_element(&existing);
        }
        let count = doc.query_all(&format!(".{}", self.config.token_class)).len();
        doc.mount_overlay(&CounterOverlay::new(count, &self.config));
        count
    }
}
