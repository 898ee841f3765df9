//! Formatting helpers for presenting counts.

/// "`<count>` are already using PCF!" with the localized tail. The count is
/// printed exactly as the backend sent it.
pub fn adoption_line(count: u64, tail: &str) -> String {
    format!("{count} {tail}")
}
