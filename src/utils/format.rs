//! Formatting utilities for sidebar and list display values.

/// Metadata key whose value is a byte count.
const FILESIZE_KEY: &str = "filesize";

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000_000 => {
            format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
        }
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{bytes}B"),
    }
}

/// Display string for one metadata field.
///
/// Byte counts are humanized; missing values render as a dash.
pub fn format_metadata_value(key: &str, value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some(raw) if key == FILESIZE_KEY => match raw.parse::<u64>() {
            Ok(bytes) => format_size(Some(bytes)),
            Err(_) => raw.to_string(),
        },
        Some(raw) => raw.to_string(),
    }
}
