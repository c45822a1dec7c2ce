//! API parity tests — validates that the JSON shapes served by the backend
//! match what the portfolio page reads.
//!
//! These tests serialize the real model types (no HTTP server needed) and
//! check field names and types.

use folio_core::{ContentModel, Defaults, ProjectRecord};
use folio_runtime::{CacheStatus, CachedSnapshot};

fn builtin_content() -> ContentModel {
    let defaults = Defaults::builtin();
    ContentModel {
        profile: defaults.profile,
        projects: defaults.projects,
        experiences: defaults.experiences,
        skills: vec!["SQL".into(), "Power BI".into()],
        education: defaults.education,
        certifications: defaults.certifications,
        courses: defaults.courses,
    }
}

/// Profile shape: { name, role, bio, aboutText, avatar, banner, social }
#[test]
fn test_profile_shape() {
    let json = serde_json::to_value(builtin_content()).unwrap();
    let profile = &json["profile"];

    for field in ["name", "role", "bio", "aboutText", "avatar", "banner"] {
        assert!(profile[field].is_string(), "profile.{} should be a string", field);
    }
    assert!(profile["social"]["linkedin"].is_string());
    assert!(profile["social"]["github"].is_string());
    assert!(profile["social"]["email"].is_string());
}

/// Top-level collections are always arrays, even when empty.
#[test]
fn test_content_collections_are_arrays() {
    let json = serde_json::to_value(builtin_content()).unwrap();
    for field in [
        "projects",
        "experiences",
        "skills",
        "education",
        "certifications",
        "courses",
    ] {
        assert!(json[field].is_array(), "{} should be an array", field);
    }
    assert_eq!(json["skills"][1], "Power BI");
}

/// Project shape; `link` is omitted when absent.
#[test]
fn test_project_shape() {
    let project = ProjectRecord {
        id: "proj-sheet-0".into(),
        title: "Vendas".into(),
        category: "Geral".into(),
        thumbnail: "https://placehold.co/600x400?text=No+Image".into(),
        images: vec!["https://placehold.co/600x400?text=No+Image".into()],
        description: String::new(),
        technologies: vec!["SQL".into()],
        link: None,
    };
    let json = serde_json::to_value(&project).unwrap();

    assert!(json["id"].is_string());
    assert!(json["images"].is_array());
    assert!(json["technologies"].is_array());
    assert!(json.get("link").is_none());

    let linked = ProjectRecord {
        link: Some("https://example.com".into()),
        ..project
    };
    assert_eq!(
        serde_json::to_value(&linked).unwrap()["link"],
        "https://example.com"
    );
}

/// Experience entry: { id, role, company, period, description }
#[test]
fn test_experience_shape() {
    let json = serde_json::to_value(builtin_content()).unwrap();
    let first = &json["experiences"][0];
    assert!(first["role"].is_string());
    assert!(first["company"].is_string());
    assert!(first["period"].is_string());
    assert!(first["description"].is_string());
}

/// Cached snapshot: { data, timestamp, fresh }
#[test]
fn test_cached_snapshot_shape() {
    let snapshot = CachedSnapshot {
        data: builtin_content(),
        timestamp: 1_700_000_000_000,
        fresh: false,
    };
    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["data"]["projects"].is_array());
    assert!(json["timestamp"].is_i64());
    assert_eq!(json["fresh"], false);
}

/// Cache status omits timestamp and age when nothing is cached.
#[test]
fn test_cache_status_shape() {
    let empty = CacheStatus {
        key: "portfolio_data_v1".into(),
        ttl_secs: 60,
        present: false,
        timestamp: None,
        age_ms: None,
        fresh: false,
    };
    let json = serde_json::to_value(&empty).unwrap();
    assert_eq!(json["ttlSecs"], 60);
    assert!(json.get("timestamp").is_none());
    assert!(json.get("ageMs").is_none());
}
