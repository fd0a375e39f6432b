use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Write the wallpaper path into the desktop preferences domain.
///
/// `com.apple.desktop` is the legacy key; newer desktops may need a relog
/// before picking it up.
pub fn apply_wallpaper(path: &Path) -> Result<()> {
    let value = format!(r#"{{default = {{ImageFilePath = "{}"; }};}}"#, path.display());

    let status = Command::new("defaults")
        .args(["write", "com.apple.desktop", "Background", &value])
        .status()
        .context("Failed to run defaults to set the wallpaper")?;

    if !status.success() {
        anyhow::bail!("defaults write exited with {status}");
    }
    Ok(())
}
