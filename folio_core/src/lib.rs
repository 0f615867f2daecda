//! # folio-core
//!
//! Behaviour for the folio portfolio page, written against a small capability
//! trait instead of the browser so every piece runs under `cargo test`.
//!
//! ## Components
//!
//! - [`nav`] - mobile menu open/close and outside-click dismissal
//! - [`scroll`] - "scrolled" top bar and active section highlighting
//! - [`anchors`] - smooth in-page anchor scrolling with a header offset
//! - [`images`] - deferred image source promotion
//! - [`reveal`] - one-shot fade-in when elements enter the viewport
//! - [`token_mode`] - the token mode easter egg
//!
//! [`controller::PageController`] owns all of them and is what a host (the
//! Leptos landing page, or a test) talks to.
//!
//! ## Hosts
//!
//! A host provides a [`dom::DocumentModel`] and a [`storage::FlagStore`].
//! [`memory::MemoryDocument`] and [`storage::MemoryFlagStore`] are the
//! in-process implementations used by the test suite.
//!
//! ```rust
//! use folio_core::config::PageConfig;
//! use folio_core::controller::PageController;
//! use folio_core::memory::MemoryDocument;
//! use folio_core::storage::MemoryFlagStore;
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body_id();
//! let p = doc.append_element(body, "p");
//! doc.append_text(p, "small pages load fast");
//!
//! let mut page = PageController::new(PageConfig::default(), doc, MemoryFlagStore::default());
//! page.content_ready();
//! for key in ["t", "o", "k", "e", "n"] {
//!     page.on_key(key);
//! }
//! assert!(page.is_token_mode_active());
//! assert_eq!(page.document().inner_html(p).matches("class=\"token ").count(), 4);
//! ```

pub mod anchors;
pub mod config;
pub mod controller;
pub mod counter;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod images;
pub mod memory;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod token_mode;
pub mod tokenizer;

pub use config::PageConfig;
pub use controller::{ClickOutcome, PageController};
pub use dom::{DocumentModel, Run};
pub use error::FolioError;
pub use storage::FlagStore;
