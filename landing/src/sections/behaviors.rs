//! Mounts the page behaviours once the markup is in the document.

use leptos::prelude::*;

use crate::web::{PageRuntime, SharedController};

/// Renders nothing. Installs the [`PageRuntime`] after the first render and
/// tears it down when unmounted.
#[component]
#[allow(clippy::unused_unit)]
pub fn Behaviors(controller: SharedController) -> impl IntoView {
    let runtime = StoredValue::new_local(None::<PageRuntime>);

    Effect::new(move || {
        if runtime.with_value(Option::is_some) {
            return;
        }
        let installed = PageRuntime::install(controller.clone());
        runtime.set_value(Some(installed));
    });

    on_cleanup(move || {
        runtime.update_value(|slot| {
            if let Some(installed) = slot.take() {
                installed.teardown();
            }
        });
    });

    view! {}
}
