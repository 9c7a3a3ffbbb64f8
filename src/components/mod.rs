//! DOM bindings, one module per page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard markup is rendered by the backend. Each module looks up the
//! elements it needs by ID and stays inactive when any of them is missing.
//! Behaviors share nothing but the document itself.

pub mod chat_form;
pub mod chat_history;
pub mod report_form;
pub mod reports_list;
pub mod voice_input;
