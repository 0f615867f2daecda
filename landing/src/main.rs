// folio landing page (Leptos 0.8, CSR)

mod sections;
mod web;

use folio_core::PageConfig;
use leptos::prelude::*;
use sections::*;

/// Page behaviour settings, embedded at build time.
const PAGE_CONFIG: &str = include_str!("../folio.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = PageConfig::load_or_default(PAGE_CONFIG);
    // Runs before mount so the loading marker is on <html> ahead of first paint.
    let controller = web::controller(config);
    if controller.is_none() {
        tracing::error!("[folio][error] no window or document; page behaviours disabled");
    }
    leptos::mount::mount_to_body(move || view! { <App controller=controller /> });
}

#[component]
fn App(controller: Option<web::SharedController>) -> impl IntoView {
    view! {
        <EasterEggs />
        <Nav />
        <main>
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Contact />
        </main>
        <Footer />
        {controller.map(|controller| view! { <Behaviors controller=controller /> })}
    }
}
