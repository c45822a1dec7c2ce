//! Runtime types.

use folio_core::{ContentModel, SheetKind};
use folio_ingest::CollectionOrigins;
use serde::Serialize;

/// Summary of one ingestion run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Epoch millis when the run started.
    pub started_at: i64,
    pub duration_ms: i64,
    /// Configured sheets that could not be fetched.
    pub unavailable: Vec<SheetKind>,
    pub origins: CollectionOrigins,
    pub counts: ContentCounts,
    /// Whether the result was written to the cache.
    pub cached: bool,
}

/// Record counts of an assembled model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentCounts {
    pub projects: usize,
    pub experiences: usize,
    pub skills: usize,
    pub education: usize,
    pub certifications: usize,
    pub courses: usize,
}

impl ContentCounts {
    pub fn of(content: &ContentModel) -> Self {
        Self {
            projects: content.projects.len(),
            experiences: content.experiences.len(),
            skills: content.skills.len(),
            education: content.education.len(),
            certifications: content.certifications.len(),
            courses: content.courses.len(),
        }
    }
}

/// Cached content, returned even when stale.
#[derive(Debug, Clone, Serialize)]
pub struct CachedSnapshot {
    pub data: ContentModel,
    pub timestamp: i64,
    pub fresh: bool,
}

/// State of the cache entry without its payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    pub key: String,
    pub ttl_secs: u64,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_ms: Option<i64>,
    pub fresh: bool,
}
