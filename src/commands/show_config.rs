//! Config command - Show the effective settings

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use mouse_control::config::{self, Settings};

/// Execute the config command
pub fn execute(settings: &Settings, path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::settings_path()?,
    };

    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Settings file: {}{}", path.display(), source);
    println!("{}", settings_table(settings));
    Ok(())
}

/// Render settings as a two-column table
pub fn settings_table(settings: &Settings) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Setting"), Cell::new("Value")]);

    let rows = [
        ("starting_credits", settings.starting_credits.to_string()),
        ("default_x", settings.default_x.clone()),
        ("default_y", settings.default_y.clone()),
        ("reset_delay_ms", settings.reset_delay_ms.to_string()),
        ("sample_interval_ms", settings.sample_interval_ms.to_string()),
    ];
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_table() {
        let rendered = settings_table(&Settings::default()).to_string();
        assert!(rendered.contains("starting_credits"));
        assert!(rendered.contains("sample_interval_ms"));
        assert!(rendered.contains("500"));
    }
}
