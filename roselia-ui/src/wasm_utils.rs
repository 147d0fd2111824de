//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! In Rust/WASM, when you attach a JavaScript event listener using a `Closure`,
//! you need to ensure the closure lives as long as the listener is attached.
//! The naive approach is `closure.forget()`, but this leaks memory and leaves
//! the listener attached forever.
//!
//! Instead the closure is stored in a struct that implements `Drop`, removing
//! the listener when the struct is dropped:
//!
//! ```ignore
//! // Listener is attached when EventListener is created
//! let listener = EventListener::new(window.into(), "scroll", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! Keep the listener in a hook value to tie it to a component's lifetime.

use roselia_common::SectionBounds;
use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself from its target when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attaches `callback` for `event_name` on `target`.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Listen on the window (scroll, resize).
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys_x::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }

    /// Listen on the document (keydown).
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        Some(Self::new(document.into(), event_name, callback))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// `key` of a keyboard event passed through as a raw `JsValue`.
pub fn keyboard_key(event: &wasm_bindgen_x::JsValue) -> Option<String> {
    event
        .dyn_ref::<web_sys_x::KeyboardEvent>()
        .map(|e| e.key())
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    web_sys_x::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Layout bounds of the elements with the given ids, in the order given.
/// Ids with no element in the document are skipped.
pub fn section_bounds<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionBounds> {
    let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    ids.into_iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id)?
                .dyn_into::<web_sys_x::HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                id,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect()
}

/// Smooth-scroll the element with `id` to the vertical center of the viewport.
pub fn scroll_into_view_centered(id: &str) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = web_sys_x::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    options.set_block(web_sys_x::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
