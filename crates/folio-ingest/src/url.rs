//! Share-link rewriting so sheet-provided images can be embedded directly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::csv::clean_text;

/// Host serving raw Google Drive file content.
pub const DRIVE_CONTENT_HOST: &str = "https://lh3.googleusercontent.com/d/";

static DRIVE_PATH_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap());
static DRIVE_QUERY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").unwrap());

/// Rewrite a Drive or OneDrive share link into an embeddable image URL.
///
/// Quotes and surrounding whitespace are removed first. Drive links become
/// `https://lh3.googleusercontent.com/d/<id>`; OneDrive viewer links become
/// download links. Anything unrecognized passes through cleaned.
pub fn normalize_url(raw: &str) -> String {
    let url: String = clean_text(raw)
        .chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .collect();
    if url.is_empty() {
        return url;
    }

    if url.contains("drive.google.com") {
        if let Some(id) = drive_file_id(&url) {
            return format!("{}{}", DRIVE_CONTENT_HOST, id);
        }
    }

    if url.contains("onedrive.live.com") {
        if url.contains("view.aspx") {
            return url.replacen("view.aspx", "download", 1);
        }
        if url.contains("embed") {
            return url;
        }
        return url.replacen("redir=0", "redir=1", 1);
    }

    url
}

fn drive_file_id(url: &str) -> Option<&str> {
    DRIVE_PATH_ID
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
