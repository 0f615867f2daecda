use super::{OWNER, VERSION};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{format!("© 2025 {OWNER} · folio {VERSION}")}</p>
                <a href="#home" class="footer-link">"Back to top ↑"</a>
            </div>
        </footer>
    }
}
