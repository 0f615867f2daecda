//! [`DocumentModel`] over the live DOM.

use folio_core::DocumentModel;
use folio_core::counter::CounterOverlay;
use folio_core::dom::Run;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Text, Window};

/// `NodeFilter.SHOW_TEXT`
const SHOW_TEXT: u32 = 0x4;

fn dom_warn(op: &str, err: JsValue) {
    warn!("[folio][warn] {op} failed: {err:?}");
}

pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    /// The document of the current browsing context.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    pub fn scroll_smooth(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    pub fn is_loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }

    fn token_node(&self, run: &Run, token_class: &str) -> Result<Node, JsValue> {
        match run.class_name(token_class) {
            Some(class) => {
                let span = self.document.create_element("span")?;
                span.set_class_name(&class);
                span.set_text_content(Some(run.text()));
                Ok(span.into())
            }
            None => Ok(self.document.create_text_node(run.text()).into()),
        }
    }
}

impl DocumentModel for WebDocument {
    type Element = Element;
    type Text = Text;
    type Snapshot = String;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                dom_warn("querySelectorAll", err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        element.closest(selector).unwrap_or_else(|err| {
            dom_warn("closest", err);
            None
        })
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            dom_warn("setAttribute", err);
        }
    }

    fn remove_attribute(&mut self, element: &Element, name: &str) {
        if let Err(err) = element.remove_attribute(name) {
            dom_warn("removeAttribute", err);
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &Element, class: &str) {
        if let Err(err) = element.class_list().add_1(class) {
            dom_warn("classList.add", err);
        }
    }

    fn remove_class(&mut self, element: &Element, class: &str) {
        if let Err(err) = element.class_list().remove_1(class) {
            dom_warn("classList.remove", err);
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|html| f64::from(html.offset_top()))
            .unwrap_or_default()
    }

    fn text_leaves(&self, element: &Element) -> Vec<Text> {
        let walker = match self.document.create_tree_walker_with_what_to_show(element, SHOW_TEXT) {
            Ok(walker) => walker,
            Err(err) => {
                dom_warn("createTreeWalker", err);
                return Vec::new();
            }
        };
        let mut leaves = Vec::new();
        while let Ok(Some(node)) = walker.next_node() {
            if let Ok(text) = node.dyn_into::<Text>() {
                leaves.push(text);
            }
        }
        leaves
    }

    fn text_of(&self, text: &Text) -> String {
        text.data()
    }

    fn text_parent(&self, text: &Text) -> Option<Element> {
        text.parent_element()
    }

    fn replace_text(&mut self, text: &Text, runs: &[Run], token_class: &str) {
        let Some(parent) = text.parent_node() else {
            return;
        };
        let fragment = self.document.create_document_fragment();
        for run in runs {
            let appended = self
                .token_node(run, token_class)
                .and_then(|node| fragment.append_child(&node));
            if let Err(err) = appended {
                dom_warn("building token fragment", err);
                return;
            }
        }
        if let Err(err) = parent.replace_child(&fragment, text) {
            dom_warn("replaceChild", err);
        }
    }

    fn snapshot(&self, element: &Element) -> String {
        element.inner_html()
    }

    fn restore(&mut self, element: &Element, snapshot: String) {
        element.set_inner_html(&snapshot);
    }

    fn mount_overlay(&mut self, overlay: &CounterOverlay) -> Option<Element> {
        let body = self.document.body()?;
        let element = self
            .document
            .create_element("div")
            .map_err(|err| dom_warn("createElement", err))
            .ok()?;
        element.set_id(&overlay.id);
        element.set_inner_html(&overlay.to_html());
        body.append_child(&element)
            .map_err(|err| dom_warn("appendChild", err))
            .ok()?;
        Some(element)
    }

    fn remove_element(&mut self, element: &Element) {
        element.remove();
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let overflow = if locked { "hidden" } else { "auto" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            dom_warn("style.overflow", err);
        }
    }
}
