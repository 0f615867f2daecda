use super::OWNER;
use leptos::prelude::*;

/// Section ids and their menu labels, in page order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// The fixed top bar. Open/closed and active-link state are driven from
/// `folio-core` through class names, so nothing here is reactive.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="top-nav">
            <div class="nav-container">
                <a href="#home" class="nav-logo">{OWNER}</a>
                <button class="menu-toggle" aria-label="Toggle navigation">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <ul class="nav-menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <li>
                                    <a href=format!("#{id}") class="nav-link">{*label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
