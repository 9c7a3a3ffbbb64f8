//! Reports list loader.

use web_sys::Element;

use crate::config::PageConfig;
use crate::error::ApiError;
use crate::net::api;
use crate::state::reports::ReportsView;
use crate::util::dom;

/// Re-fetch and redraw the whole reports list.
///
/// No-op when the list container is missing. Safe to call repeatedly; each
/// call issues its own request and the last one to finish wins.
pub async fn load(config: &PageConfig) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(container) =
        dom::element_by_id::<Element>(&document, &config.elements.reports_list_container)
    else {
        return;
    };

    container.set_inner_html(&ReportsView::Loading.markup());

    let url = &config.endpoints.reports;
    let result = api::fetch_reports(url).await;
    match &result {
        Ok(reports) => log::debug!("GET {url}: {} reports", reports.len()),
        Err(ApiError::Status(status)) => log::warn!("GET {url} failed with status {status}"),
        Err(e) => log::error!("GET {url}: {e}"),
    }
    container.set_inner_html(&ReportsView::from_result(result).markup());
}
