//! Event wiring between the browser and the page controller.
//!
//! Every listener is registered here and kept until [`PageRuntime::teardown`],
//! so an unmounted page leaves nothing behind on `window` or `document`.

use folio_core::reveal::RevealEntry;
use js_sys::Array;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use super::SharedController;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: impl Into<EventTarget>,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let target = target.into();
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("[folio][warn] could not listen for {event}: {err:?}");
            return None;
        }
        Some(Self {
            target,
            event,
            callback,
        })
    }

    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("[folio][warn] could not remove {} listener: {err:?}", self.event);
        }
    }
}

/// Installed listeners and the reveal observer for one mounted page.
pub struct PageRuntime {
    controller: SharedController,
    listeners: Vec<Listener>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl PageRuntime {
    /// Attach every listener, then run the content-ready step.
    pub fn install(controller: SharedController) -> Self {
        let (window, document, loaded) = {
            let page = controller.borrow();
            let web = page.document();
            (web.window().clone(), web.document().clone(), web.is_loaded())
        };

        let mut listeners = Vec::new();

        let page = controller.clone();
        listeners.extend(Listener::attach(document.clone(), "click", move |event| {
            on_click(&page, &event);
        }));

        let page = controller.clone();
        listeners.extend(Listener::attach(document.clone(), "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if let Some(transition) = page.borrow_mut().on_key(&key) {
                info!("[folio] token mode {transition:?}");
            }
        }));

        let page = controller.clone();
        listeners.extend(Listener::attach(window.clone(), "scroll", move |_| {
            let mut page = page.borrow_mut();
            let offset = page.document().scroll_offset();
            page.on_scroll(offset, js_sys::Date::now());
        }));

        if !loaded {
            let page = controller.clone();
            listeners.extend(Listener::attach(window.clone(), "load", move |_| {
                let promoted = page.borrow_mut().on_load();
                debug!(promoted, "deferred images promoted");
            }));
        }

        let observer = observe_reveals(&controller);
        let targets = controller.borrow_mut().content_ready();
        match &observer {
            Some((observer, _)) => {
                for target in &targets {
                    observer.observe(target);
                }
            }
            None => {
                let mut page = controller.borrow_mut();
                for target in &targets {
                    page.on_intersection(RevealEntry {
                        target: target.clone(),
                        is_intersecting: true,
                        ratio: 1.0,
                    });
                }
            }
        }

        {
            let mut page = controller.borrow_mut();
            if loaded {
                let promoted = page.on_load();
                debug!(promoted, "deferred images promoted");
            }
            let offset = page.document().scroll_offset();
            page.on_scroll(offset, js_sys::Date::now());
        }

        info!(
            listeners = listeners.len(),
            observed = targets.len(),
            "[folio] page behaviours installed"
        );
        Self {
            controller,
            listeners,
            observer,
        }
    }

    /// Detach everything and restore the page.
    pub fn teardown(self) {
        for listener in &self.listeners {
            listener.detach();
        }
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
        let unwatched = self.controller.borrow_mut().teardown();
        debug!(unwatched = unwatched.len(), "[folio] page behaviours removed");
    }
}

fn on_click(controller: &SharedController, event: &Event) {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return;
    };
    let mut page = controller.borrow_mut();
    let outcome = page.on_click(&target);
    if outcome.prevent_default {
        event.prevent_default();
    }
    if let Some(top) = outcome.scroll_to {
        page.document().scroll_smooth(top);
    }
}

fn observe_reveals(controller: &SharedController) -> Option<(IntersectionObserver, ObserverCallback)> {
    let options = controller.borrow().observer_options();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let page = controller.clone();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let revealed = page.borrow_mut().on_intersection(RevealEntry {
                target: target.clone(),
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            });
            if revealed {
                observer.unobserve(&target);
            }
        }
    });

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => Some((observer, callback)),
        Err(err) => {
            warn!("[folio][warn] IntersectionObserver unavailable: {err:?}");
            None
        }
    }
}
