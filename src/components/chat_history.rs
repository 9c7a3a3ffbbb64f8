//! Chat history loader.
//!
//! Runs once at startup and fills the chat container with the server's
//! rendered history.

use web_sys::{Document, Element, HtmlInputElement};

use crate::config::PageConfig;
use crate::error::ApiError;
use crate::net::api;
use crate::state::chat::{ChatPatch, ChatUpdate};
use crate::util::dom;

/// Apply a chat update to the container and, when asked, the query input.
pub(crate) fn apply(container: &Element, input: Option<&HtmlInputElement>, update: &ChatUpdate) {
    match &update.patch {
        ChatPatch::Replace(html) => container.set_inner_html(html),
        append @ ChatPatch::Append(_) => {
            container.set_inner_html(&append.apply(&container.inner_html()));
        }
    }
    if update.clear_input {
        if let Some(input) = input {
            input.set_value("");
        }
    }
    if update.scroll_to_bottom {
        dom::scroll_to_bottom(container);
    }
}

pub async fn load(document: &Document, config: &PageConfig) {
    let Some(container) =
        dom::element_by_id::<Element>(document, &config.elements.chat_history_container)
    else {
        return;
    };

    let url = &config.endpoints.chat_history;
    let result = api::fetch_chat_history(url).await;
    match &result {
        Ok(_) => log::debug!("GET {url}: history loaded"),
        Err(ApiError::Status(status)) => log::warn!("GET {url} failed with status {status}"),
        Err(e) => log::error!("GET {url}: {e}"),
    }
    apply(&container, None, &ChatUpdate::from_history(result));
}
