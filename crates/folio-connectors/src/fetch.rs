//! Fetch-all join over the six sheets.

use std::time::Duration;

use folio_core::{SheetKind, SheetSources, SheetTexts};
use folio_ingest::clean_text;
use tracing::{info, warn};

use crate::http::SheetFetcher;

enum Outcome {
    /// No URL configured for the sheet.
    Skipped,
    Fetched(String),
    Unavailable,
}

async fn fetch_one(
    fetcher: &dyn SheetFetcher,
    kind: SheetKind,
    url: Option<&str>,
    timeout: Duration,
) -> Outcome {
    let Some(url) = url else {
        return Outcome::Skipped;
    };

    match tokio::time::timeout(timeout, fetcher.fetch_text(url)).await {
        Ok(Ok(text)) => Outcome::Fetched(clean_text(&text)),
        Ok(Err(e)) => {
            warn!("Sheet {} unavailable: {}", kind, e);
            Outcome::Unavailable
        }
        Err(_) => {
            warn!("Sheet {} timed out after {:?}: {}", kind, timeout, url);
            Outcome::Unavailable
        }
    }
}

/// Fetch every configured sheet concurrently and wait for all of them.
///
/// A sheet that fails, returns a non-success status or exceeds `timeout`
/// contributes empty text and is listed in `SheetTexts::unavailable`; it never
/// affects the other sheets.
pub async fn fetch_all(
    fetcher: &dyn SheetFetcher,
    sources: &SheetSources,
    timeout: Duration,
) -> SheetTexts {
    let (profile, technologies, about, contact, projects, texts) = tokio::join!(
        fetch_one(fetcher, SheetKind::Profile, sources.profile.as_deref(), timeout),
        fetch_one(
            fetcher,
            SheetKind::Technologies,
            sources.technologies.as_deref(),
            timeout
        ),
        fetch_one(fetcher, SheetKind::About, sources.about.as_deref(), timeout),
        fetch_one(fetcher, SheetKind::Contact, sources.contact.as_deref(), timeout),
        fetch_one(fetcher, SheetKind::Projects, sources.projects.as_deref(), timeout),
        fetch_one(fetcher, SheetKind::Texts, sources.texts.as_deref(), timeout),
    );

    let mut sheets = SheetTexts::default();
    let mut fetched = 0;
    for (kind, outcome) in [
        (SheetKind::Profile, profile),
        (SheetKind::Technologies, technologies),
        (SheetKind::About, about),
        (SheetKind::Contact, contact),
        (SheetKind::Projects, projects),
        (SheetKind::Texts, texts),
    ] {
        match outcome {
            Outcome::Fetched(text) => {
                fetched += 1;
                sheets = sheets.with(kind, text);
            }
            Outcome::Unavailable => sheets.unavailable.push(kind),
            Outcome::Skipped => {}
        }
    }

    info!(
        "Sheet fetch: {} fetched, {} unavailable",
        fetched,
        sheets.unavailable.len()
    );
    sheets
}
