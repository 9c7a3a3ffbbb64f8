//! Chat submission handler.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use super::chat_history;
use crate::config::PageConfig;
use crate::net::api;
use crate::state::chat::ChatUpdate;
use crate::util::{dom, form};

/// Intercept chat form submits and post them to the backend.
///
/// Requires both the form and the chat container; the query input is
/// optional. There is no in-flight guard, so a double submit posts twice.
pub fn bind(document: &Document, config: &Rc<PageConfig>) {
    let ids = &config.elements;
    let Some(chat_form) = dom::element_by_id::<HtmlFormElement>(document, &ids.chat_form) else {
        return;
    };
    let Some(container) = dom::element_by_id::<Element>(document, &ids.chat_history_container)
    else {
        return;
    };
    let input = dom::element_by_id::<HtmlInputElement>(document, &ids.query_input);

    let config = Rc::clone(config);
    let target = chat_form.clone();
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let Some(body) = form::multipart_body(&chat_form, event) else {
                log::error!("could not serialize #{}", config.elements.chat_form);
                chat_history::apply(&container, input.as_ref(), &ChatUpdate::unsent());
                return;
            };

            let config = Rc::clone(&config);
            let container = container.clone();
            let input = input.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let url = &config.endpoints.chat;
                let result = api::send_chat(url, body).await;
                match &result {
                    Ok(reply) if !reply.ok() => {
                        log::warn!("POST {url} answered {}", reply.status);
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("POST {url}: {e}"),
                }
                chat_history::apply(&container, input.as_ref(), &ChatUpdate::from_reply(result));
            });
        },
    )
    .forget();
}
