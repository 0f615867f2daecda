//! Browser bindings for the page controller.
//!
//! `folio-core` owns the behaviour; this module gives it a real document, a
//! real `localStorage`, and the event listeners that drive it.

mod document;
mod runtime;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{PageConfig, PageController};

pub use document::WebDocument;
pub use runtime::PageRuntime;
pub use storage::LocalStorageFlags;

pub type WebController = PageController<WebDocument, LocalStorageFlags>;

/// The controller as shared by every listener closure.
pub type SharedController = Rc<RefCell<WebController>>;

/// Build the controller over the current window and run its pre-render step.
pub fn controller(config: PageConfig) -> Option<SharedController> {
    let document = WebDocument::current()?;
    let store = LocalStorageFlags::from_window(document.window());
    let mut controller = PageController::new(config, document, store);
    if controller.prepare() {
        tracing::debug!("token mode flag set; root marked as loading");
    }
    Some(Rc::new(RefCell::new(controller)))
}
