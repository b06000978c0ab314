use crate::paths::PATH_HOME;

use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Ask the user for an export directory. Returns None if the dialog was
/// cancelled, which callers treat as a silent no-op.
pub fn pick_export_dir(last: Option<&Path>) -> Option<PathBuf> {
    let start = last.unwrap_or_else(|| PATH_HOME.as_path());
    FileDialog::new()
        .set_title("Select Export Folder")
        .set_directory(start)
        .pick_folder()
}

pub fn check_for_update() -> bool {
    // Try to get the latest release tag from GitHub
    if let Ok(client) = reqwest::blocking::Client::new()
        .get("https://api.github.com/repos/wunnr/tilesmith/releases/latest")
        .header("User-Agent", "tilesmith")
        .send()
    {
        if let Ok(release) = client.json::<serde_json::Value>() {
            // Extract the tag name (vX.X.X format)
            if let Some(tag_name) = release["tag_name"].as_str() {
                // Strip the 'v' prefix
                let latest_version = tag_name.strip_prefix('v').unwrap_or(tag_name);

                let current_version = env!("CARGO_PKG_VERSION");

                if let (Ok(latest_semver), Ok(current_semver)) = (
                    semver::Version::parse(latest_version),
                    semver::Version::parse(current_version),
                ) {
                    return latest_semver > current_semver;
                }
            }
        }
    }

    // Default to false if any part of the process fails
    false
}
