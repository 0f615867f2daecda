//! A hello for visitors who open the dev tools.

use super::{OWNER, VERSION};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn banner() -> String {
    format!(
        r#"
   ____     ___
  / __/__  / (_)__
 / _// _ \/ / / _ \
/_/  \___/_/_/\___/

  {OWNER} | folio {VERSION}
"#
    )
}

/// Styled console lines: (text, css).
const LINES: &[(&str, &str)] = &[
    ("%cRendered with Rust + Leptos, compiled to WebAssembly.", "color: #8a8f98;"),
    ("%c(o_o) Curious how many tokens this page costs?", "color: #7dd3fc;"),
    ("%c(._.) psst... click the page and type: token", "color: #444; font-size: 9px;"),
];

#[component]
#[allow(clippy::unused_unit)]
pub fn EasterEggs() -> impl IntoView {
    Effect::new(move || print_console_art());

    view! {}
}

fn print_console_art() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #7dd3fc; font-family: monospace; font-size: 11px;"),
    );
    for (text, style) in LINES {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}
