//! Deferred image sources.

use tracing::debug;

use crate::config::ImageConfig;
use crate::dom::DocumentModel;

/// Move every deferred source into `src`. Returns how many images changed.
/// Images already promoted no longer match, so running twice is a no-op.
pub fn promote_deferred<D: DocumentModel>(doc: &mut D, config: &ImageConfig) -> usize {
    let attr = &config.deferred_attribute;
    let mut promoted = 0;
    for image in doc.query_all(&format!("img[{attr}]")) {
        let Some(source) = doc.attribute(&image, attr) else {
            continue;
        };
        doc.set_attribute(&image, "src", &source);
        doc.remove_attribute(&image, attr);
        promoted += 1;
    }
    debug!(promoted, "deferred images");
    promoted
}
