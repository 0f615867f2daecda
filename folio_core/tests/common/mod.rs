#![allow(dead_code)]

use folio_core::config::PageConfig;
use folio_core::controller::PageController;
use folio_core::memory::{MemoryDocument, NodeId};
use folio_core::storage::MemoryFlagStore;

pub type Page = PageController<MemoryDocument, MemoryFlagStore>;

/// Handles into the fixture page.
pub struct Fixture {
    pub doc: MemoryDocument,
    pub top_nav: NodeId,
    pub toggle: NodeId,
    pub menu: NodeId,
    pub links: Vec<NodeId>,
    pub sections: Vec<NodeId>,
    pub jobs: Vec<NodeId>,
    pub image: NodeId,
    pub eligible: usize,
}

pub const SECTIONS: &[(&str, &str, f64)] = &[
    ("home", "Home", 0.0),
    ("about", "About", 700.0),
    ("experience", "Experience", 1400.0),
    ("contact", "Contact", 2300.0),
];

/// A small portfolio page with the full DOM contract.
pub fn fixture() -> Fixture {
    let mut doc = MemoryDocument::new();
    let body = doc.body_id();
    let mut eligible = 0;

    let top_nav = doc.append_with(body, "nav", &[("class", "top-nav")]);
    let brand = doc.append_with(top_nav, "a", &[("href", "#home"), ("class", "nav-logo")]);
    doc.append_text(brand, "R. Okafor");
    eligible += 1;
    let toggle = doc.append_with(top_nav, "button", &[("class", "menu-toggle"), ("aria-label", "Menu")]);
    for _ in 0..3 {
        doc.append_element(toggle, "span");
    }
    eligible += 4;
    let menu = doc.append_with(top_nav, "ul", &[("class", "nav-menu")]);
    let mut links = Vec::new();
    for (id, label, _) in SECTIONS {
        let li = doc.append_element(menu, "li");
        let href = format!("#{id}");
        let a = doc.append_with(li, "a", &[("href", &href)]);
        doc.append_text(a, label);
        links.push(a);
        eligible += 2;
    }

    let mut sections = Vec::new();
    let mut jobs = Vec::new();
    let mut image = None;
    for (id, label, top) in SECTIONS {
        let section = doc.append_with(body, "section", &[("id", id), ("class", "section")]);
        doc.set_offset_top(section, *top);
        let h2 = doc.append_element(section, "h2");
        doc.append_text(h2, label);
        eligible += 1;
        match *id {
            "about" => {
                let p = doc.append_element(section, "p");
                doc.append_text(p, "I build  calm, fast\ninterfaces. ");
                let em = doc.append_element(p, "em");
                doc.append_text(em, "Mostly");
                doc.append_text(p, " in Rust.");
                eligible += 1;
                image = Some(doc.append_with(
                    section,
                    "img",
                    &[("data-src", "img/portrait.webp"), ("alt", "Portrait")],
                ));
            }
            "experience" => {
                for (role, detail) in [
                    ("Staff Engineer", "Led the rendering team."),
                    ("Engineer", "Shipped the design system."),
                ] {
                    let item = doc.append_with(section, "div", &[("class", "experience-item")]);
                    let h3 = doc.append_element(item, "h3");
                    doc.append_text(h3, role);
                    let p = doc.append_element(item, "p");
                    doc.append_text(p, detail);
                    jobs.push(item);
                    eligible += 2;
                }
            }
            "contact" => {
                let p = doc.append_element(section, "p");
                doc.append_text(p, "Write to ");
                let a = doc.append_with(p, "a", &[("href", "mailto:hi@example.com")]);
                doc.append_text(a, "hi@example.com");
                doc.append_text(p, ".");
                let label = doc.append_element(section, "label");
                doc.append_text(label, "   ");
                eligible += 3;
            }
            _ => {}
        }
        sections.push(section);
    }

    Fixture {
        doc,
        top_nav,
        toggle,
        menu,
        links,
        sections,
        jobs,
        image: image.expect("about image"),
        eligible,
    }
}

pub fn page_with(doc: MemoryDocument, store: MemoryFlagStore) -> Page {
    PageController::new(PageConfig::default(), doc, store)
}

pub fn type_text(page: &mut Page, text: &str) {
    for ch in text.chars() {
        page.on_key(&ch.to_string());
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
