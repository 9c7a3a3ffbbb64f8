//! Controller startup.
//!
//! One routine owns the whole initialization order: wait for the document,
//! read configuration, start logging, bind the form handlers, then run the
//! two initial loads side by side.

use std::rc::Rc;

use futures::channel::oneshot;
use gloo_events::EventListener;
use web_sys::{Document, DocumentReadyState};

use crate::components::{chat_form, chat_history, report_form, reports_list, voice_input};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::util::dom;

/// Resolve once the document has been parsed.
async fn document_ready(document: &Document) {
    if document.ready_state() != DocumentReadyState::Loading {
        return;
    }
    let (tx, rx) = oneshot::channel::<()>();
    let _listener = EventListener::once(document, "DOMContentLoaded", move |_| {
        let _ = tx.send(());
    });
    let _ = rx.await;
}

/// Entry point spawned from the wasm start hook.
pub async fn run() {
    let Some(document) = dom::document() else {
        return;
    };
    document_ready(&document).await;

    let loaded = PageConfig::from_document(&document);
    let config = loaded.as_ref().map_or_else(|_| PageConfig::default(), Clone::clone);
    if console_log::init_with_level(config.level()).is_err() {
        log::debug!("console logger already installed");
    }
    if let Err(e) = loaded {
        log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID} block: {e}");
    }
    log::info!("dashboard controller starting");

    let config = Rc::new(config);
    chat_form::bind(&document, &config);
    report_form::bind(&document, &config);
    voice_input::bind(&document, &config);

    futures::join!(
        chat_history::load(&document, &config),
        reports_list::load(&config)
    );
}
