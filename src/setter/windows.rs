use anyhow::Result;
use std::path::Path;

/// Ask the OS to apply the wallpaper now, persist it across sessions, and
/// broadcast the change to other processes.
#[cfg(target_os = "windows")]
pub fn apply_wallpaper(path: &Path) -> Result<()> {
    use anyhow::Context;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::UI::WindowsAndMessaging::{
        SPI_SETDESKWALLPAPER, SPIF_SENDWININICHANGE, SPIF_UPDATEINIFILE, SystemParametersInfoW,
    };

    let mut wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    unsafe {
        SystemParametersInfoW(
            SPI_SETDESKWALLPAPER,
            0,
            Some(wide.as_mut_ptr() as *mut _),
            SPIF_UPDATEINIFILE | SPIF_SENDWININICHANGE,
        )
    }
    .context("SystemParametersInfo failed to set the wallpaper")?;

    Ok(())
}

#[cfg(not(target_os = "windows"))]
pub fn apply_wallpaper(_path: &Path) -> Result<()> {
    anyhow::bail!("the Windows wallpaper backend is only available on Windows")
}
