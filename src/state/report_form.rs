//! Report submission outcome and status-line text.
//!
//! Only `201 Created` counts as success. Any other status, including other
//! 2xx codes, is reported as a rejection using the server's `detail`.

#[cfg(test)]
#[path = "report_form_test.rs"]
mod report_form_test;

use crate::error::ApiError;
use crate::net::api::SubmitReply;
use crate::net::types::ErrorBody;

pub const STATUS_CREATED: u16 = 201;

pub const SAVED_TEXT: &str = "Report saved successfully!";
pub const REJECTED_FALLBACK_TEXT: &str = "Failed to save report.";
pub const UNREACHABLE_TEXT: &str = "Network error. Please try again.";

/// Color family of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// CSS color applied to the message element.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#16a34a",
            Self::Error => "#dc2626",
        }
    }
}

/// Text and tone written into the report message element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub tone: Tone,
    pub text: String,
}

/// Result of one report submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// Non-201 answer with a JSON body; carries the server detail if usable.
    Rejected(Option<String>),
    /// Transport failure, or a non-201 answer whose body was not JSON.
    Unreachable,
}

impl SubmitOutcome {
    pub fn from_result(result: Result<SubmitReply, ApiError>) -> Self {
        match result {
            Ok(reply) if reply.status == STATUS_CREATED => Self::Created,
            Ok(reply) => match serde_json::from_str::<ErrorBody>(&reply.body) {
                Ok(body) => Self::Rejected(body.detail_text()),
                Err(_) => Self::Unreachable,
            },
            Err(_) => Self::Unreachable,
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Created)
    }

    pub fn reloads_reports(&self) -> bool {
        matches!(self, Self::Created)
    }

    pub fn status_line(&self) -> StatusLine {
        match self {
            Self::Created => StatusLine {
                tone: Tone::Success,
                text: SAVED_TEXT.to_owned(),
            },
            Self::Rejected(Some(detail)) => StatusLine {
                tone: Tone::Error,
                text: format!("Error: {detail}"),
            },
            Self::Rejected(None) => StatusLine {
                tone: Tone::Error,
                text: REJECTED_FALLBACK_TEXT.to_owned(),
            },
            Self::Unreachable => StatusLine {
                tone: Tone::Error,
                text: UNREACHABLE_TEXT.to_owned(),
            },
        }
    }
}
