use super::*;

#[test]
fn defaults_match_dashboard_template() {
    let config = PageConfig::default();
    assert_eq!(config.endpoints.chat_history, "/chat/history");
    assert_eq!(config.endpoints.chat, "/chat");
    assert_eq!(config.endpoints.reports, "/reports");
    assert_eq!(config.elements.chat_history_container, "chat-history-container");
    assert_eq!(config.elements.report_message, "report-message");
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn blank_block_yields_defaults() {
    assert_eq!(PageConfig::from_json("  \n").unwrap(), PageConfig::default());
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(
        r#"{"endpoints": {"reports": "/api/reports"}, "log_level": "debug", "extra": 1}"#,
    )
    .unwrap();
    assert_eq!(config.endpoints.reports, "/api/reports");
    assert_eq!(config.endpoints.chat, "/chat");
    assert_eq!(config.elements, ElementIds::default());
    assert_eq!(config.level(), log::Level::Debug);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = PageConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn malformed_block_is_an_error() {
    assert!(PageConfig::from_json("42").is_err());
    assert!(PageConfig::from_json("{\"endpoints\":").is_err());
}
