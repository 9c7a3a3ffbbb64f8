//! Chat container updates.
//!
//! DESIGN
//! ======
//! The container only ever receives two kinds of writes: the initial history
//! load replaces it, and every later submission appends to it. Both are
//! derived here from the request result so the DOM code stays mechanical.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::error::ApiError;
use crate::net::api::HtmlReply;
use crate::render::{CHAT_HISTORY_FAILED, CHAT_HISTORY_UNREACHABLE, CHAT_SEND_UNREACHABLE};

/// A write to the chat container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatPatch {
    Replace(String),
    Append(String),
}

impl ChatPatch {
    /// Container content after applying this patch to `current`.
    pub fn apply(&self, current: &str) -> String {
        match self {
            Self::Replace(html) => html.clone(),
            Self::Append(html) => {
                let mut next = String::with_capacity(current.len() + html.len());
                next.push_str(current);
                next.push_str(html);
                next
            }
        }
    }
}

/// Everything a finished chat request changes on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatUpdate {
    pub patch: ChatPatch,
    pub clear_input: bool,
    pub scroll_to_bottom: bool,
}

impl ChatUpdate {
    /// Outcome of the one-time `GET /chat/history`.
    pub fn from_history(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(html) => Self {
                patch: ChatPatch::Replace(html),
                clear_input: false,
                scroll_to_bottom: true,
            },
            Err(ApiError::Status(_)) => Self::replace_only(CHAT_HISTORY_FAILED),
            Err(_) => Self::replace_only(CHAT_HISTORY_UNREACHABLE),
        }
    }

    /// Outcome of a `POST /chat`. Error bodies are appended like replies.
    pub fn from_reply(result: Result<HtmlReply, ApiError>) -> Self {
        match result {
            Ok(reply) if reply.ok() => Self {
                patch: ChatPatch::Append(reply.html),
                clear_input: true,
                scroll_to_bottom: true,
            },
            Ok(reply) => Self {
                patch: ChatPatch::Append(reply.html),
                clear_input: false,
                scroll_to_bottom: false,
            },
            Err(_) => Self::unsent(),
        }
    }

    /// A message that never left the page, whether the request failed or the
    /// form could not be serialized.
    pub fn unsent() -> Self {
        Self {
            patch: ChatPatch::Append(CHAT_SEND_UNREACHABLE.to_owned()),
            clear_input: false,
            scroll_to_bottom: false,
        }
    }

    fn replace_only(html: &str) -> Self {
        Self {
            patch: ChatPatch::Replace(html.to_owned()),
            clear_input: false,
            scroll_to_bottom: false,
        }
    }
}
