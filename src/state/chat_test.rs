use super::*;

fn reply(status: u16, html: &str) -> Result<HtmlReply, ApiError> {
    Ok(HtmlReply {
        status,
        html: html.to_owned(),
    })
}

// =============================================================
// History
// =============================================================

#[test]
fn history_success_replaces_content_and_scrolls() {
    let update = ChatUpdate::from_history(Ok("<div>old chat</div>".to_owned()));
    assert_eq!(update.patch, ChatPatch::Replace("<div>old chat</div>".to_owned()));
    assert!(update.scroll_to_bottom);
    assert!(!update.clear_input);
    assert_eq!(update.patch.apply("<p>placeholder</p>"), "<div>old chat</div>");
}

#[test]
fn history_status_and_network_failures_use_distinct_messages() {
    let status = ChatUpdate::from_history(Err(ApiError::Status(401)));
    let network = ChatUpdate::from_history(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(status.patch, ChatPatch::Replace(CHAT_HISTORY_FAILED.to_owned()));
    assert_eq!(network.patch, ChatPatch::Replace(CHAT_HISTORY_UNREACHABLE.to_owned()));
    assert_ne!(CHAT_HISTORY_FAILED, CHAT_HISTORY_UNREACHABLE);
    assert!(!status.scroll_to_bottom);
    assert!(!network.scroll_to_bottom);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn reply_success_appends_clears_input_and_scrolls() {
    let update = ChatUpdate::from_reply(reply(200, "<div>F</div>"));
    assert_eq!(update.patch.apply("<div>C</div>"), "<div>C</div><div>F</div>");
    assert!(update.clear_input);
    assert!(update.scroll_to_bottom);
}

#[test]
fn reply_error_status_still_appends_server_markup() {
    let update = ChatUpdate::from_reply(reply(500, "<div class=\"err\">boom</div>"));
    assert_eq!(update.patch, ChatPatch::Append("<div class=\"err\">boom</div>".to_owned()));
    assert!(!update.clear_input);
    assert_eq!(update.patch.apply("C"), "C<div class=\"err\">boom</div>");
}

#[test]
fn reply_network_failure_appends_fixed_fragment() {
    let update = ChatUpdate::from_reply(Err(ApiError::Network("dns".to_owned())));
    assert_eq!(update.patch, ChatPatch::Append(CHAT_SEND_UNREACHABLE.to_owned()));
    assert!(!update.clear_input);
}

#[test]
fn successive_submissions_accumulate_in_order() {
    let updates = [
        ChatUpdate::from_reply(reply(200, "a")),
        ChatUpdate::from_reply(reply(422, "b")),
        ChatUpdate::from_reply(Err(ApiError::Network("x".to_owned()))),
        ChatUpdate::from_reply(reply(200, "c")),
    ];
    let content = updates
        .iter()
        .fold("h".to_owned(), |acc, update| update.patch.apply(&acc));
    assert_eq!(content, format!("hab{CHAT_SEND_UNREACHABLE}c"));
}

#[test]
fn unsent_message_appends_fixed_fragment_and_keeps_input() {
    let update = ChatUpdate::unsent();
    assert_eq!(update.patch.apply("<p>earlier</p>"), format!("<p>earlier</p>{CHAT_SEND_UNREACHABLE}"));
    assert!(!update.clear_input);
    assert!(!update.scroll_to_bottom);
    assert_eq!(update, ChatUpdate::from_reply(Err(ApiError::Network("offline".to_owned()))));
}
