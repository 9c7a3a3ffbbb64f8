//! Report submission handler.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, HtmlElement, HtmlFormElement};

use super::reports_list;
use crate::config::PageConfig;
use crate::net::api;
use crate::net::types::ReportPayload;
use crate::state::report_form::SubmitOutcome;
use crate::util::{dom, form};

/// Intercept report form submits and send them as JSON.
///
/// Requires the form and the message element. On `201 Created` the form is
/// reset and the list reloaded; every other answer only updates the message.
pub fn bind(document: &Document, config: &Rc<PageConfig>) {
    let ids = &config.elements;
    let Some(report_form) = dom::element_by_id::<HtmlFormElement>(document, &ids.report_form)
    else {
        return;
    };
    let Some(message) = dom::element_by_id::<HtmlElement>(document, &ids.report_message) else {
        return;
    };

    let config = Rc::clone(config);
    let target = report_form.clone();
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let payload = ReportPayload::from_entries(form::text_entries(&report_form));

            let config = Rc::clone(&config);
            let report_form = report_form.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let url = &config.endpoints.reports;
                let result = api::create_report(url, &payload).await;
                let status = match &result {
                    Ok(reply) => Some(reply.status),
                    Err(e) => {
                        log::error!("POST {url}: {e}");
                        None
                    }
                };
                let outcome = SubmitOutcome::from_result(result);
                match (&outcome, status) {
                    (SubmitOutcome::Created, _) => log::info!("POST {url}: report created"),
                    (SubmitOutcome::Rejected(detail), Some(status)) => log::warn!(
                        "POST {url} rejected with {status}: {}",
                        detail.as_deref().unwrap_or("no detail")
                    ),
                    (SubmitOutcome::Unreachable, Some(status)) => {
                        log::error!("POST {url} answered {status} with a non-JSON body");
                    }
                    _ => {}
                }

                let line = outcome.status_line();
                dom::set_status(&message, line.tone.color(), &line.text);
                if outcome.resets_form() {
                    report_form.reset();
                }
                if outcome.reloads_reports() {
                    reports_list::load(&config).await;
                }
            });
        },
    )
    .forget();
}
