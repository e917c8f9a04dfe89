//! Shared helper functions for CLI commands

use tabled::{builder::Builder, settings::Style};

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render headers and rows as a rounded table
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_cell: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row.iter().map(|cell| truncate_str(cell, max_cell)));
    }
    builder.build().with(Style::rounded()).to_string()
}
