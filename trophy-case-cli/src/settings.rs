//! CLI settings (default site data file location).
//!
//! The settings file is `~/.config/trophy-case/settings.toml`; commands
//! that need site data fall back to the saved path when `--data` is not
//! given.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/trophy-case/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("trophy-case").join("settings.toml")
}

/// Read `site.data_file` from `settings.toml`, if set.
pub fn load_data_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("site")?.get("data_file")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save the data-file path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated settings are
/// preserved.
pub fn save_data_path(path: &Path) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let site = table
        .entry("site")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let site_table = site
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[site] is not a table"))?;
    site_table.insert(
        "data_file".to_string(),
        toml::Value::String(path.display().to_string()),
    );

    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    std::fs::write(&settings, contents)?;
    Ok(())
}
