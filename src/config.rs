//! Page configuration: endpoint paths, element IDs, and log level.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard template may embed a JSON block
//! `<script type="application/json" id="aarogya-config">` to override any
//! field. Missing fields keep their defaults, so an empty object is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// ID of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "aarogya-config";

/// Backend paths consumed by the controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub chat_history: String,
    pub chat: String,
    pub reports: String,
    pub transcribe: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat_history: "/chat/history".to_owned(),
            chat: "/chat".to_owned(),
            reports: "/reports".to_owned(),
            transcribe: "/transcribe".to_owned(),
        }
    }
}

/// DOM element IDs that activate each behavior.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub chat_history_container: String,
    pub chat_form: String,
    pub query_input: String,
    pub reports_list_container: String,
    pub report_form: String,
    pub report_message: String,
    pub voice_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            chat_history_container: "chat-history-container".to_owned(),
            chat_form: "chat-form".to_owned(),
            query_input: "query-input".to_owned(),
            reports_list_container: "reports-list-container".to_owned(),
            report_form: "report-form".to_owned(),
            report_message: "report-message".to_owned(),
            voice_button: "voice-button".to_owned(),
        }
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub endpoints: Endpoints,
    pub elements: ElementIds,
    /// `error`, `warn`, `info`, `debug` or `trace`; anything else means `info`.
    pub log_level: Option<String>,
}

impl PageConfig {
    /// Parse an inline config block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the block is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Resolved log level for the console logger.
    pub fn level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(log::Level::Info)
    }

    /// Read the configuration embedded in the current document.
    ///
    /// A missing block yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error for a malformed block; the caller decides how
    /// to report it once logging is up.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Result<Self, serde_json::Error> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
