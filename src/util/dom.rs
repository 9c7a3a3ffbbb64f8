//! Small web-sys helpers shared by the page bindings.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// The current document, if running in a window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element by ID and cast it to the expected type.
///
/// Returns `None` both when the element is missing and when it has a
/// different type, which disables the behavior that needed it.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            log::warn!("#{id} has an unexpected element type");
            None
        }
    }
}

pub fn scroll_to_bottom(el: &Element) {
    el.set_scroll_top(el.scroll_height());
}

/// Write a colored one-line status message.
pub fn set_status(el: &HtmlElement, color: &str, text: &str) {
    let _ = el.style().set_property("color", color);
    el.set_text_content(Some(text));
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}
