//! REST helpers for the dashboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. The decoding helpers
//! are plain functions so they also build natively for tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers translate failures into
//! page text and never propagate them further.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Report, TranscribeResponse};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::report_form::STATUS_CREATED;

/// Form field carrying the recorded audio for `/transcribe`.
pub const AUDIO_FIELD: &str = "audio_file";
/// File name attached to the uploaded recording.
pub const AUDIO_FILE_NAME: &str = "recording.webm";

/// An HTML body together with the status it arrived with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlReply {
    pub status: u16,
    pub html: String,
}

impl HtmlReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Raw answer to a report submission; interpretation is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReply {
    pub status: u16,
    pub body: String,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_reports(body: &str) -> Result<Vec<Report>, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Pair a submission status with its body.
///
/// A `201` means the report is stored, so a body that failed to arrive is
/// treated as empty. Any other status needs its body for the error text.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn submit_reply(status: u16, body: Result<String, ApiError>) -> Result<SubmitReply, ApiError> {
    let body = match body {
        Ok(body) => body,
        Err(e) if status == STATUS_CREATED => {
            log::debug!("ignoring unreadable body of created report: {e}");
            String::new()
        }
        Err(e) => return Err(e),
    };
    Ok(SubmitReply { status, body })
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_transcription(body: &str) -> Result<TranscribeResponse, ApiError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(feature = "hydrate")]
pub use client::*;

#[cfg(feature = "hydrate")]
mod client {
    use gloo_net::http::{Request, Response};

    use super::{HtmlReply, SubmitReply, decode_reports, decode_transcription, submit_reply};
    use super::{AUDIO_FIELD, AUDIO_FILE_NAME};
    use crate::error::ApiError;
    use crate::net::types::{Report, ReportPayload, TranscribeResponse};

    async fn read_html(resp: Response) -> Result<HtmlReply, ApiError> {
        let status = resp.status();
        let html = resp.text().await?;
        Ok(HtmlReply { status, html })
    }

    /// Fetch the rendered chat history fragment.
    ///
    /// # Errors
    ///
    /// `Status` for a non-2xx answer, `Network` if the request never completed.
    pub async fn fetch_chat_history(url: &str) -> Result<String, ApiError> {
        let resp = Request::get(url).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.text().await?)
    }

    /// Post the chat form as multipart data.
    ///
    /// Non-2xx answers are returned as `Ok` because their body is
    /// server-rendered error markup that the page shows as is.
    ///
    /// # Errors
    ///
    /// `Network` if the request never completed.
    pub async fn send_chat(url: &str, form: web_sys::FormData) -> Result<HtmlReply, ApiError> {
        let resp = Request::post(url).body(form)?.send().await?;
        read_html(resp).await
    }

    /// Fetch the current user's reports.
    ///
    /// # Errors
    ///
    /// `Status` for a non-2xx answer, `Decode` for a body that is not a report
    /// array, `Network` if the request never completed.
    pub async fn fetch_reports(url: &str) -> Result<Vec<Report>, ApiError> {
        let resp = Request::get(url).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await?;
        decode_reports(&body)
    }

    /// Submit a new report as JSON.
    ///
    /// # Errors
    ///
    /// `Network` if the request never completed, or if the body of a
    /// non-`201` answer could not be read.
    pub async fn create_report(url: &str, payload: &ReportPayload) -> Result<SubmitReply, ApiError> {
        let resp = Request::post(url).json(payload)?.send().await?;
        let status = resp.status();
        submit_reply(status, resp.text().await.map_err(ApiError::from))
    }

    /// Upload a voice recording for transcription.
    ///
    /// # Errors
    ///
    /// `Status` for a non-2xx answer, `Decode` for an unexpected body,
    /// `Network` if the upload never completed.
    pub async fn transcribe(url: &str, audio: &web_sys::Blob) -> Result<TranscribeResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob_and_filename(AUDIO_FIELD, audio, AUDIO_FILE_NAME)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let resp = Request::post(url).body(form)?.send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await?;
        decode_transcription(&body)
    }
}
