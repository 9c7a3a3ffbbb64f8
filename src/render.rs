//! Markup produced by the controller itself.
//!
//! Everything else on the page is server-rendered. Report fields are
//! interpolated without escaping, so the backend is responsible for never
//! storing markup in them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use crate::net::types::Report;
use crate::util::date::format_short_date;

// =============================================================
// Chat
// =============================================================

pub const CHAT_HISTORY_FAILED: &str =
    r#"<p class="text-xs text-red-500 p-2 text-center">Could not load chat history.</p>"#;

pub const CHAT_HISTORY_UNREACHABLE: &str = r#"<p class="text-xs text-red-500 p-2 text-center">Network error while loading chat history. Check your connection and refresh.</p>"#;

pub const CHAT_SEND_UNREACHABLE: &str = r#"<div class="text-xs text-red-500 p-2 text-center bg-red-50 rounded-lg">Network error. Your message was not sent.</div>"#;

// =============================================================
// Reports
// =============================================================

pub const REPORTS_LOADING: &str =
    r#"<p class="text-sm text-gray-400 italic">Loading reports...</p>"#;

pub const REPORTS_EMPTY: &str =
    r#"<p class="text-sm text-gray-500 italic">No reports uploaded yet.</p>"#;

pub const REPORTS_FAILED: &str = r#"<p class="text-sm text-red-500">Failed to load reports.</p>"#;

pub const REPORTS_UNREACHABLE: &str =
    r#"<p class="text-sm text-red-500">Network error while loading reports.</p>"#;

/// Class carried by the root element of every report card.
pub const REPORT_CARD_CLASS: &str = "report-card";

/// Render one report as a card.
pub fn report_card(report: &Report) -> String {
    let mut html = String::with_capacity(256);
    let _ = write!(
        html,
        r#"<div class="{REPORT_CARD_CLASS} p-3 mb-2 bg-white border border-gray-200 rounded-lg shadow-sm">"#
    );
    let _ = write!(
        html,
        r#"<div class="flex justify-between items-center"><h4 class="font-semibold text-sm text-gray-800">{}</h4><span class="text-xs text-gray-500">{}</span></div>"#,
        report.title,
        format_short_date(&report.upload_date),
    );
    let _ = write!(
        html,
        r#"<p class="text-xs text-indigo-600 mt-1">{}</p>"#,
        report.report_type
    );
    if let Some(description) = report.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(html, r#"<p class="text-xs text-gray-600 mt-1">{description}</p>"#);
    }
    html.push_str("</div>");
    html
}

/// Render a full reports list, in the order given.
pub fn report_list(reports: &[Report]) -> String {
    if reports.is_empty() {
        return REPORTS_EMPTY.to_owned();
    }
    reports.iter().map(report_card).collect()
}
