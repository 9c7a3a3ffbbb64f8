use super::*;

fn reply(status: u16, body: &str) -> Result<SubmitReply, ApiError> {
    Ok(SubmitReply {
        status,
        body: body.to_owned(),
    })
}

#[test]
fn created_resets_form_and_reloads_once() {
    let outcome = SubmitOutcome::from_result(reply(201, r#"{"id":"1","title":"CBC"}"#));
    assert_eq!(outcome, SubmitOutcome::Created);
    assert!(outcome.resets_form());
    assert!(outcome.reloads_reports());
    assert_eq!(
        outcome.status_line(),
        StatusLine {
            tone: Tone::Success,
            text: SAVED_TEXT.to_owned()
        }
    );
}

#[test]
fn created_ignores_body_shape() {
    assert_eq!(SubmitOutcome::from_result(reply(201, "")), SubmitOutcome::Created);
}

#[test]
fn ok_200_is_not_success() {
    let outcome = SubmitOutcome::from_result(reply(200, r#"{"id":"1"}"#));
    assert_eq!(outcome, SubmitOutcome::Rejected(None));
    assert!(!outcome.resets_form());
    assert!(!outcome.reloads_reports());
    assert_eq!(outcome.status_line().tone, Tone::Error);
}

#[test]
fn bad_request_shows_server_detail() {
    let outcome = SubmitOutcome::from_result(reply(400, r#"{"detail":"title required"}"#));
    assert!(!outcome.resets_form());
    assert!(!outcome.reloads_reports());
    let line = outcome.status_line();
    assert_eq!(line.tone, Tone::Error);
    assert!(line.text.contains("title required"));
}

#[test]
fn rejection_without_detail_uses_fallback() {
    let outcome = SubmitOutcome::from_result(reply(400, r#"{"message":"nope"}"#));
    assert_eq!(outcome.status_line().text, REJECTED_FALLBACK_TEXT);
}

#[test]
fn validation_errors_are_listed() {
    let outcome = SubmitOutcome::from_result(reply(
        422,
        r#"{"detail":[{"loc":["body","report_type"],"msg":"Field required","type":"missing"}]}"#,
    ));
    assert_eq!(outcome.status_line().text, "Error: Field required");
}

#[test]
fn non_json_error_body_is_a_network_style_failure() {
    let outcome = SubmitOutcome::from_result(reply(502, "<html>Bad Gateway</html>"));
    assert_eq!(outcome, SubmitOutcome::Unreachable);
    assert_eq!(outcome.status_line().text, UNREACHABLE_TEXT);
}

#[test]
fn transport_failure_shows_generic_message() {
    let outcome = SubmitOutcome::from_result(Err(ApiError::Network("offline".to_owned())));
    assert!(!outcome.reloads_reports());
    assert_eq!(
        outcome.status_line(),
        StatusLine {
            tone: Tone::Error,
            text: UNREACHABLE_TEXT.to_owned()
        }
    );
}

#[test]
fn tones_have_distinct_colors() {
    assert_ne!(Tone::Success.color(), Tone::Error.color());
}
