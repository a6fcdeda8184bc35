//! Browser binding of the lazy image loader.
//!
//! One `IntersectionObserver` serves the whole page. It is built on the first
//! scan, reused across navigations, and only torn down by [`shutdown`].

use std::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::lazy::{DEFERRED_ATTR, ROOT_MARGIN, SELECTOR, THRESHOLD};
use crate::core::lazy::{LazyImage, LazyLoader, VisibilityObserver};

/// Placeholder `<img>` element.
#[derive(Clone, PartialEq)]
pub struct WebImage(HtmlImageElement);

impl LazyImage for WebImage {
    fn has_source(&self) -> bool {
        self.0
            .get_attribute("src")
            .is_some_and(|src| !src.is_empty())
    }

    fn deferred_source(&self) -> Option<String> {
        self.0.get_attribute(DEFERRED_ATTR)
    }

    fn set_source(&self, src: &str) {
        self.0.set_src(src);
    }

    fn is_attached(&self) -> bool {
        self.0.is_connected()
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct WebObserver {
    observer: IntersectionObserver,
    // Must outlive the observer
    _callback: ObserverCallback,
}

impl WebObserver {
    fn new() -> Option<Self> {
        let callback: ObserverCallback = Closure::new(|entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() {
                    with_existing(|loader| loader.on_visible(&WebImage(image)));
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(e) => {
                log::error!("IntersectionObserver unavailable: {e:?}");
                None
            }
        }
    }
}

impl VisibilityObserver for WebObserver {
    type Target = WebImage;

    fn observe(&self, target: &WebImage) {
        self.observer.observe(&target.0);
    }

    fn unobserve(&self, target: &WebImage) {
        self.observer.unobserve(&target.0);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

thread_local! {
    static LOADER: RefCell<Option<LazyLoader<WebObserver>>> = const { RefCell::new(None) };
}

fn with_existing<R>(f: impl FnOnce(&LazyLoader<WebObserver>) -> R) -> Option<R> {
    LOADER.with(|cell| cell.borrow().as_ref().map(f))
}

fn with_loader<R>(f: impl FnOnce(&LazyLoader<WebObserver>) -> R) -> Option<R> {
    LOADER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = WebObserver::new().map(LazyLoader::new);
        }
        slot.as_ref().map(f)
    })
}

/// Register every unresolved placeholder in the document.
pub fn scan_document() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(SELECTOR) else {
        return;
    };

    let images: Vec<WebImage> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlImageElement>().ok())
        .map(WebImage)
        .collect();

    if let Some((added, pending)) =
        with_loader(|loader| (loader.scan(images), loader.pending_count()))
        && added > 0
    {
        log::debug!("observing {added} new lazy images, {pending} pending");
    }
}

/// Disconnect and drop the shared observer.
pub fn shutdown() {
    if let Some(loader) = LOADER.with(|cell| cell.borrow_mut().take()) {
        loader.shutdown();
    }
}
