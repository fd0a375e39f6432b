//! Image download into the picture directory.

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

/// Download the image behind `url` into `picture_dir`, named after `title`.
///
/// The computed output path is returned even when the fetch failed; the
/// failure is reported on stderr but deliberately not raised, so callers
/// must not assume the file exists. Only a failed write of already fetched
/// bytes is an error.
pub async fn download_wallpaper(
    client: &reqwest::Client,
    url: &str,
    picture_dir: &Path,
    title: &str,
) -> Result<PathBuf> {
    let filename = format!("{}.{}", sanitize_filename(title), extension_from_url(url));
    let outpath = picture_dir.join(filename);

    println!("{} {}", "Downloading".cyan(), url);
    match fetch_bytes(client, url).await {
        Ok(bytes) => {
            tokio::fs::write(&outpath, &bytes)
                .await
                .with_context(|| format!("writing image to {}", outpath.display()))?;
        }
        Err(reason) => {
            eprintln!("{} {} ({})", "Download failed:".red(), url, reason);
        }
    }

    Ok(outpath)
}

async fn fetch_bytes(
    client: &reqwest::Client,
    url: &str,
) -> Result<bytes::Bytes, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    response.bytes().await
}

/// File extension taken from the URL's last dot-segment.
fn extension_from_url(url: &str) -> &str {
    match url.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "jpg",
    }
}

/// Replace characters that are illegal in filenames on the supported hosts.
fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
