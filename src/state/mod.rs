//! Pure models behind each page region.
//!
//! DESIGN
//! ======
//! Each module turns a finished request into the exact change its region
//! receives, so the DOM bindings in `components` only copy values across.

pub mod chat;
pub mod report_form;
pub mod reports;
pub mod voice;
