//! Wallpaper metadata extraction from the photo-of-the-day page.
//!
//! The page advertises the full-resolution image and its title through
//! `twitter:image:src` and `twitter:title` meta tags.

use scraper::{Html, Selector};
use thiserror::Error;

const IMAGE_SELECTOR: &str = r#"meta[name="twitter:image:src"]"#;
const TITLE_SELECTOR: &str = r#"meta[name="twitter:title"]"#;

/// The day's featured photo as advertised by the page's meta tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperDetail {
    pub url: String,
    pub title: String,
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("invalid meta tag selector: {0}")]
    Selector(String),
}

/// Fetch the photo page and extract the wallpaper URL and title.
///
/// Transport failures (unreachable server, timeout, error status) fold into
/// `Ok(None)`; only a parser-level failure is an error.
pub async fn fetch_wallpaper_detail(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Option<WallpaperDetail>, ScrapeError> {
    let response = match client.get(base_url).send().await {
        Ok(response) => response,
        Err(_) => return Ok(None),
    };
    if !response.status().is_success() {
        return Ok(None);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return Ok(None),
    };

    parse_wallpaper_detail(&body)
}

/// Extract the meta tag pair from a page body.
pub fn parse_wallpaper_detail(body: &str) -> Result<Option<WallpaperDetail>, ScrapeError> {
    // The page writes extra script tags through document.write; an
    // unterminated one swallows the rest of the markup, so those lines have
    // to go before parsing.
    let content = strip_injected_scripts(body);
    let document = Html::parse_document(&content);

    let image_selector =
        Selector::parse(IMAGE_SELECTOR).map_err(|e| ScrapeError::Selector(e.to_string()))?;
    let title_selector =
        Selector::parse(TITLE_SELECTOR).map_err(|e| ScrapeError::Selector(e.to_string()))?;

    let url = document
        .select(&image_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"));
    let title = document
        .select(&title_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"));

    match (url, title) {
        (Some(url), Some(title)) => Ok(Some(WallpaperDetail {
            url: url.to_string(),
            title: title.to_string(),
        })),
        _ => Ok(None),
    }
}

fn strip_injected_scripts(body: &str) -> String {
    body.lines()
        .filter(|line| !line.contains("document.write"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_PAGE: &str = r#"<html><head>
<meta name="twitter:image:src" content="http://x/img.jpg">
<meta name="twitter:title" content="My Photo">
</head><body></body></html>"#;

    const INJECTED_PAGE: &str = r#"<html><head>
<script>document.write('<div class="ad">')
<meta name="twitter:image:src" content="http://x/img.jpg">
<meta name="twitter:title" content="My Photo">
</head><body></body></html>"#;

    #[test]
    fn extracts_url_and_title() {
        let detail = parse_wallpaper_detail(GOOD_PAGE).unwrap().unwrap();
        assert_eq!(detail.url, "http://x/img.jpg");
        assert_eq!(detail.title, "My Photo");
    }

    #[test]
    fn missing_image_tag_is_not_found() {
        let page = r#"<html><head><meta name="twitter:title" content="My Photo"></head></html>"#;
        assert_eq!(parse_wallpaper_detail(page).unwrap(), None);
    }

    #[test]
    fn missing_title_tag_is_not_found() {
        let page =
            r#"<html><head><meta name="twitter:image:src" content="http://x/img.jpg"></head></html>"#;
        assert_eq!(parse_wallpaper_detail(page).unwrap(), None);
    }

    #[test]
    fn injected_script_lines_are_stripped() {
        let stripped = strip_injected_scripts("a\ndocument.write('x')\nb");
        assert_eq!(stripped, "a\nb");
    }

    #[test]
    fn unfiltered_script_injection_hides_the_meta_tags() {
        // The unterminated script turns everything after it into raw script
        // text, so the meta tags never make it into the tree.
        let document = Html::parse_document(INJECTED_PAGE);
        let selector = Selector::parse(IMAGE_SELECTOR).unwrap();
        assert!(document.select(&selector).next().is_none());
    }

    #[test]
    fn filtering_recovers_the_meta_tags() {
        let detail = parse_wallpaper_detail(INJECTED_PAGE).unwrap().unwrap();
        assert_eq!(detail.url, "http://x/img.jpg");
        assert_eq!(detail.title, "My Photo");
    }
}
