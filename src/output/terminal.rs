//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, never truncated
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// A `Label:` column padded to line up values in a detail panel.
pub fn detail_row<T: ToString>(label: &str, value: T) -> String {
    let label = format!("{label}:");
    format!("  {label:<14}{}", value.to_string())
}

/// Turn colored output on or off for the whole process.
pub fn set_color(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
