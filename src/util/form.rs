//! Form field extraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FormData(form)` captures every successful control except the button that
//! triggered the submit. The chat backend relies on that button's
//! `name`/`value` (`action=ask|summarize`), so it is added back explicitly.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Name/value pair contributed by a submit button, if it has a usable name.
pub fn submitter_field(name: Option<String>, value: Option<String>) -> Option<(String, String)> {
    let name = name.filter(|n| !n.is_empty())?;
    Some((name, value.unwrap_or_default()))
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Event, FormData, HtmlFormElement, SubmitEvent};

    use super::submitter_field;

    /// Multipart body for `form`, including the submitting button's field.
    pub fn multipart_body(form: &HtmlFormElement, event: &Event) -> Option<FormData> {
        let data = FormData::new_with_form(form).ok()?;
        let submitter = event
            .dyn_ref::<SubmitEvent>()
            .and_then(SubmitEvent::submitter);
        if let Some(button) = submitter {
            if let Some((name, value)) =
                submitter_field(button.get_attribute("name"), button.get_attribute("value"))
            {
                let _ = data.set_with_str(&name, &value);
            }
        }
        Some(data)
    }

    /// String-valued fields of `form` in document order. File inputs are
    /// skipped.
    pub fn text_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(form) else {
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        iter.filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                let key = pair.get(0).as_string()?;
                let value = pair.get(1).as_string()?;
                Some((key, value))
            })
            .collect()
    }
}
