//! Reports list region.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::error::ApiError;
use crate::net::types::Report;
use crate::render;

/// What the reports list container currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportsView {
    Loading,
    Loaded(Vec<Report>),
    /// The server answered with a non-success status.
    Failed,
    /// The request never completed or its body was not a report list.
    Unreachable,
}

impl ReportsView {
    pub fn from_result(result: Result<Vec<Report>, ApiError>) -> Self {
        match result {
            Ok(reports) => Self::Loaded(reports),
            Err(ApiError::Status(_)) => Self::Failed,
            Err(_) => Self::Unreachable,
        }
    }

    /// Full replacement markup for the container.
    pub fn markup(&self) -> String {
        match self {
            Self::Loading => render::REPORTS_LOADING.to_owned(),
            Self::Loaded(reports) => render::report_list(reports),
            Self::Failed => render::REPORTS_FAILED.to_owned(),
            Self::Unreachable => render::REPORTS_UNREACHABLE.to_owned(),
        }
    }
}
