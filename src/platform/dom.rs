//! Thin helpers over web-sys

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::page::timeout_ms;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Element the page cannot work without
pub fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

/// Required element of a specific type
pub fn require_as<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    require(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has the wrong type", id)))
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// Apply `(class, present)` pairs to an element
pub fn apply_classes(element: &Element, classes: &[(&str, bool)]) {
    let list = element.class_list();
    for (class, present) in classes {
        let _ = list.toggle_with_force(class, *present);
    }
}

/// Register an event handler for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One-shot timer; returns the handle for `clear_timeout`
pub fn set_timeout<F>(window: &Window, delay_ms: u32, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_ms(delay_ms),
    )
}

pub fn clear_timeout(window: &Window, handle: i32) {
    window.clear_timeout_with_handle(handle);
}
