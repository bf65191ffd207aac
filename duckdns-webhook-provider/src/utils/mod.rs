//! Utility modules.

/// Log sanitization utilities to prevent token and body exposure.
pub mod log_sanitizer;
