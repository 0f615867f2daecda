//! An in-process document model.
//!
//! `MemoryDocument` is a small arena DOM: elements with attributes, text
//! nodes, document order, a layout offset per element and HTML serialization
//! of inner content. It implements [`DocumentModel`] so page behaviour can be
//! exercised without a browser.

mod selector;

use tracing::warn;

use crate::counter::{CounterOverlay, HINT};
use crate::dom::{DocumentModel, Run};
use selector::{SelectorList, Subject};

/// Handle to a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    offset_top: f64,
}

/// Detached copy of a subtree, used for snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        offset_top: f64,
        children: Vec<Fragment>,
    },
    Text(String),
}

const VOID_TAGS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

struct Cursor<'a> {
    doc: &'a MemoryDocument,
    id: NodeId,
}

impl Subject for Cursor<'_> {
    fn tag(&self) -> &str {
        match &self.doc.node(self.id).kind {
            NodeKind::Element { tag, .. } => tag,
            NodeKind::Text(_) => "",
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.doc.attr_ref(self.id, name)
    }

    fn parent(&self) -> Option<Self> {
        self.doc.node(self.id).parent.map(|id| Cursor { doc: self.doc, id })
    }
}

impl MemoryDocument {
    /// An empty `<html><body></body></html>` document.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
        };
        let root = doc.alloc(NodeKind::Element {
            tag: "html".into(),
            attrs: Vec::new(),
        });
        doc.root = root;
        doc.body = doc.append_element(root, "body");
        doc
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn body_id(&self) -> NodeId {
        self.body
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
            offset_top: 0.0,
        });
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|child| *child != id);
        }
    }

    /// Append a new element under `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.alloc(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        });
        self.attach(parent, id);
        id
    }

    /// Append a new element with attributes under `parent`.
    pub fn append_with(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.append_element(parent, tag);
        for (name, value) in attrs {
            self.set_attr(id, name, value);
        }
        id
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.alloc(NodeKind::Text(text.to_string()));
        self.attach(parent, id);
        id
    }

    pub fn set_offset_top(&mut self, id: NodeId, top: f64) {
        self.node_mut(id).offset_top = top;
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    fn attr_ref(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.node_mut(id).kind {
            match attrs.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn classes(&self, id: NodeId) -> Vec<String> {
        self.attr_ref(id, "class")
            .map(|list| list.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.node(next).children.iter().rev().copied());
        }
        out
    }

    fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Element { .. })
    }

    fn parse_selector(selector: &str) -> Option<SelectorList> {
        let parsed = SelectorList::parse(selector);
        if parsed.is_none() {
            warn!("[folio][warn] unsupported selector in memory document: {selector}");
        }
        parsed
    }

    /// Concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        if let NodeKind::Text(text) = &self.node(id).kind {
            return text.clone();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|child| match &self.node(child).kind {
                NodeKind::Text(text) => Some(text.as_str()),
                NodeKind::Element { .. } => None,
            })
            .collect()
    }

    /// Serialized children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in &self.node(id).children {
            self.write_html(*child, &mut out);
        }
        out
    }

    /// Serialized `id` including its own tag.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match &self.node(id).kind {
            NodeKind::Text(text) => out.push_str(&escape(text, false)),
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push_str(&format!(" {name}=\"{}\"", escape(value, true)));
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for child in &self.node(id).children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
    }

    fn to_fragment(&self, id: NodeId) -> Fragment {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Text(text) => Fragment::Text(text.clone()),
            NodeKind::Element { tag, attrs } => Fragment::Element {
                tag: tag.clone(),
                attrs: attrs.clone(),
                offset_top: node.offset_top,
                children: node.children.iter().map(|c| self.to_fragment(*c)).collect(),
            },
        }
    }

    fn build_fragment(&mut self, parent: NodeId, fragment: Fragment) {
        match fragment {
            Fragment::Text(text) => {
                self.append_text(parent, &text);
            }
            Fragment::Element {
                tag,
                attrs,
                offset_top,
                children,
            } => {
                let id = self.alloc(NodeKind::Element { tag, attrs });
                self.node_mut(id).offset_top = offset_top;
                self.attach(parent, id);
                for child in children {
                    self.build_fragment(id, child);
                }
            }
        }
    }

    /// True while the body carries the scroll lock.
    pub fn is_scroll_locked(&self) -> bool {
        self.attr_ref(self.body, "style") == Some("overflow: hidden")
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

impl DocumentModel for MemoryDocument {
    type Element = NodeId;
    type Text = NodeId;
    type Snapshot = Vec<Fragment>;

    fn root(&self) -> Option<NodeId> {
        Some(self.root)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(list) = Self::parse_selector(selector) else {
            return Vec::new();
        };
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|id| self.is_element(*id))
            .filter(|id| list.matches(&Cursor { doc: self, id: *id }))
            .collect()
    }

    fn closest(&self, element: &NodeId, selector: &str) -> Option<NodeId> {
        let list = Self::parse_selector(selector)?;
        let mut current = Some(*element);
        while let Some(id) = current {
            if self.is_element(id) && list.matches(&Cursor { doc: self, id }) {
                return Some(id);
            }
            current = self.node(id).parent;
        }
        None
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|node| self.attr_ref(*node, "id") == Some(id))
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.attr_ref(*element, name).map(str::to_string)
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        self.set_attr(*element, name, value);
    }

    fn remove_attribute(&mut self, element: &NodeId, name: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.node_mut(*element).kind {
            attrs.retain(|(key, _)| key != name);
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        Cursor { doc: self, id: *element }.has_class(class)
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        let mut classes = self.classes(*element);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
            self.set_attr(*element, "class", &classes.join(" "));
        }
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) {
        let classes = self.classes(*element);
        if classes.iter().any(|c| c == class) {
            let kept: Vec<String> = classes.into_iter().filter(|c| c != class).collect();
            self.set_attr(*element, "class", &kept.join(" "));
        }
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.node(*element).offset_top
    }

    fn text_leaves(&self, element: &NodeId) -> Vec<NodeId> {
        self.descendants(*element)
            .into_iter()
            .filter(|id| matches!(self.node(*id).kind, NodeKind::Text(_)))
            .collect()
    }

    fn text_of(&self, text: &NodeId) -> String {
        match &self.node(*text).kind {
            NodeKind::Text(value) => value.clone(),
            NodeKind::Element { .. } => String::new(),
        }
    }

    fn text_parent(&self, text: &NodeId) -> Option<NodeId> {
        self.node(*text).parent
    }

    fn replace_text(&mut self, text: &NodeId, runs: &[Run], token_class: &str) {
        let Some(parent) = self.node(*text).parent else {
            return;
        };
        let Some(position) = self.node(parent).children.iter().position(|c| c == text) else {
            return;
        };

        let mut replacement = Vec::with_capacity(runs.len());
        for run in runs {
            let id = match run.class_name(token_class) {
                None => self.alloc(NodeKind::Text(run.text().to_string())),
                Some(class) => {
                    let span = self.alloc(NodeKind::Element {
                        tag: "span".into(),
                        attrs: vec![("class".into(), class)],
                    });
                    let inner = self.alloc(NodeKind::Text(run.text().to_string()));
                    self.attach(span, inner);
                    span
                }
            };
            self.node_mut(id).parent = Some(parent);
            replacement.push(id);
        }

        self.node_mut(*text).parent = None;
        self.node_mut(parent)
            .children
            .splice(position..=position, replacement);
    }

    fn snapshot(&self, element: &NodeId) -> Vec<Fragment> {
        self.node(*element)
            .children
            .iter()
            .map(|child| self.to_fragment(*child))
            .collect()
    }

    fn restore(&mut self, element: &NodeId, snapshot: Vec<Fragment>) {
        let children = std::mem::take(&mut self.node_mut(*element).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        for fragment in snapshot {
            self.build_fragment(*element, fragment);
        }
    }

    fn mount_overlay(&mut self, overlay: &CounterOverlay) -> Option<NodeId> {
        let body = self.body;
        let container = self.append_with(body, "div", &[("id", &overlay.id)]);
        for line in overlay.lines() {
            let row = self.append_with(container, "div", &[("class", "token-counter-line")]);
            self.append_text(row, line.label);
            let value = self.append_with(row, "span", &[("class", line.value_class)]);
            self.append_text(value, &line.value);
        }
        let hint = self.append_with(container, "div", &[("class", "token-counter-hint")]);
        self.append_text(hint, HINT);
        Some(container)
    }

    fn remove_element(&mut self, element: &NodeId) {
        self.detach(*element);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        let body = self.body;
        let value = if locked { "overflow: hidden" } else { "overflow: auto" };
        self.set_attr(body, "style", value);
    }
}
