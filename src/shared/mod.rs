//! Shared parsing and formatting utilities used across domain modules.

pub mod fmt;
pub mod rate;

pub use fmt::{format_duration, format_total};
pub use rate::parse_rate;
