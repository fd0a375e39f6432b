use std::path::PathBuf;
use thiserror::Error;

use crate::scrape::ScrapeError;

/// Everything that can abort a run, with the exit code it maps to.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("picture directory {} does not exist, please create it", .0.display())]
    PictureDirMissing(PathBuf),

    #[error("not enough free space in {} ({percent}% free)", dir.display())]
    NotEnoughSpace { dir: PathBuf, percent: u8 },

    #[error("no wallpaper URL found on {0}")]
    NoWallpaperUrl(String),

    #[error("failed to parse the photo page: {0}")]
    PageParse(#[from] ScrapeError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::PictureDirMissing(_) | RunError::Other(_) => 1,
            RunError::NotEnoughSpace { .. } => 2,
            RunError::NoWallpaperUrl(_) => 3,
            RunError::PageParse(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_external_contract() {
        assert_eq!(RunError::PictureDirMissing("/x".into()).exit_code(), 1);
        assert_eq!(
            RunError::NotEnoughSpace {
                dir: "/x".into(),
                percent: 10
            }
            .exit_code(),
            2
        );
        assert_eq!(
            RunError::NoWallpaperUrl("http://example.com".into()).exit_code(),
            3
        );
        assert_eq!(
            RunError::PageParse(ScrapeError::Selector("bad".into())).exit_code(),
            4
        );
        assert_eq!(
            RunError::Other(anyhow::anyhow!("backend failed")).exit_code(),
            1
        );
    }
}
