//! Free-space check for the picture directory.

use anyhow::Result;
use std::path::Path;

/// Returns the free space of the filesystem containing `dir` as a rounded
/// percentage.
///
/// Yields `None` when the directory does not exist or the statistics call
/// fails; callers treat that the same as an unusable disk and abort.
pub fn free_space(dir: &Path) -> Option<u8> {
    if !dir.is_dir() {
        return None;
    }
    let (free, total) = free_and_total_bytes(dir).ok()?;
    percent_free(free, total)
}

fn percent_free(free: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    Some(((free as f64 / total as f64) * 100.0).round() as u8)
}

#[cfg(unix)]
fn free_and_total_bytes(dir: &Path) -> Result<(u64, u64)> {
    let stat = nix::sys::statvfs::statvfs(dir)?;
    let fragment_size = stat.fragment_size() as u64;
    Ok((
        stat.blocks_free() as u64 * fragment_size,
        stat.blocks() as u64 * fragment_size,
    ))
}

#[cfg(windows)]
fn free_and_total_bytes(dir: &Path) -> Result<(u64, u64)> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;
    use windows::core::PCWSTR;

    let wide: Vec<u16> = dir
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let mut free = 0u64;
    let mut total = 0u64;
    unsafe {
        GetDiskFreeSpaceExW(
            PCWSTR(wide.as_ptr()),
            None,
            Some(&mut total as *mut u64),
            Some(&mut free as *mut u64),
        )
    }?;
    Ok((free, total))
}
