//! Wallpaper backends, one per supported platform.

use anyhow::Result;
use std::env;
use std::path::Path;

mod gnome;
mod macos;
mod windows;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperSetter {
    /// GNOME desktop, configured through dconf (fire-and-forget)
    Gnome,
    /// Windows, through SystemParametersInfo
    Windows,
    /// macOS, through the desktop preferences domain
    MacOs,
}

impl WallpaperSetter {
    /// Pick the backend matching the running platform.
    pub fn detect() -> Result<Self> {
        match env::consts::OS {
            "linux" => Ok(WallpaperSetter::Gnome),
            "windows" => Ok(WallpaperSetter::Windows),
            "macos" => Ok(WallpaperSetter::MacOs),
            other => anyhow::bail!("no wallpaper backend for platform '{other}'"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WallpaperSetter::Gnome => "GNOME",
            WallpaperSetter::Windows => "Windows",
            WallpaperSetter::MacOs => "macOS",
        }
    }

    /// Apply `path` as the desktop background.
    ///
    /// The path is handed to the backend verbatim; callers pass absolute
    /// paths.
    pub fn apply(&self, path: &Path) -> Result<()> {
        match self {
            WallpaperSetter::Gnome => gnome::apply_wallpaper(path),
            WallpaperSetter::Windows => windows::apply_wallpaper(path),
            WallpaperSetter::MacOs => macos::apply_wallpaper(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_matches_the_host() {
        match env::consts::OS {
            "linux" => assert_eq!(WallpaperSetter::detect().unwrap(), WallpaperSetter::Gnome),
            "windows" => assert_eq!(WallpaperSetter::detect().unwrap(), WallpaperSetter::Windows),
            "macos" => assert_eq!(WallpaperSetter::detect().unwrap(), WallpaperSetter::MacOs),
            _ => assert!(WallpaperSetter::detect().is_err()),
        }
    }
}
