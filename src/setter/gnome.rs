use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Point GNOME at the new wallpaper.
///
/// The dconf writes are launched and not waited on; a failure inside dconf
/// goes unnoticed.
pub fn apply_wallpaper(path: &Path) -> Result<()> {
    let uri = file_uri(path);

    Command::new("dconf")
        .args(["write", "/org/gnome/desktop/background/picture-uri", &uri])
        .spawn()
        .context("Failed to launch dconf to set the wallpaper")?;

    Command::new("dconf")
        .args([
            "write",
            "/org/gnome/desktop/background/picture-uri-dark",
            &uri,
        ])
        .spawn()
        .context("Failed to launch dconf to set the dark wallpaper")?;

    Ok(())
}

fn file_uri(path: &Path) -> String {
    format!("'file://{}'", path.display())
}
