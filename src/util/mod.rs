//! Utility modules for dates, form extraction, and DOM glue.

pub mod date;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod form;
