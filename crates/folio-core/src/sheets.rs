//! The six published CSV exports the content is read from, and their texts.

use serde::{Deserialize, Serialize};

/// One semantic sheet of the source spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    /// Key/value rows: name, role, avatar, banner, social links.
    Profile,
    /// One skill per row.
    Technologies,
    /// Typed rows: education, certifications, courses.
    About,
    /// Key/value rows for social links.
    Contact,
    /// Project table.
    Projects,
    /// Free-text key/value rows: name, role, bio, about text.
    Texts,
}

impl SheetKind {
    pub const ALL: [SheetKind; 6] = [
        SheetKind::Profile,
        SheetKind::Technologies,
        SheetKind::About,
        SheetKind::Contact,
        SheetKind::Projects,
        SheetKind::Texts,
    ];

    /// Suffix of the environment variable carrying this sheet's URL.
    pub fn env_suffix(&self) -> &'static str {
        match self {
            Self::Profile => "PROFILE",
            Self::Technologies => "TECHNOLOGIES",
            Self::About => "ABOUT",
            Self::Contact => "CONTACT",
            Self::Projects => "PROJECTS",
            Self::Texts => "TEXTS",
        }
    }
}

impl std::fmt::Display for SheetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile => write!(f, "profile"),
            Self::Technologies => write!(f, "technologies"),
            Self::About => write!(f, "about"),
            Self::Contact => write!(f, "contact"),
            Self::Projects => write!(f, "projects"),
            Self::Texts => write!(f, "texts"),
        }
    }
}

/// Published CSV URL per sheet. `None` means the sheet is not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSources {
    pub profile: Option<String>,
    pub technologies: Option<String>,
    pub about: Option<String>,
    pub contact: Option<String>,
    pub projects: Option<String>,
    pub texts: Option<String>,
}

impl SheetSources {
    pub fn url(&self, kind: SheetKind) -> Option<&str> {
        let url = match kind {
            SheetKind::Profile => &self.profile,
            SheetKind::Technologies => &self.technologies,
            SheetKind::About => &self.about,
            SheetKind::Contact => &self.contact,
            SheetKind::Projects => &self.projects,
            SheetKind::Texts => &self.texts,
        };
        url.as_deref()
    }

    pub fn set(&mut self, kind: SheetKind, url: Option<String>) {
        let slot = match kind {
            SheetKind::Profile => &mut self.profile,
            SheetKind::Technologies => &mut self.technologies,
            SheetKind::About => &mut self.about,
            SheetKind::Contact => &mut self.contact,
            SheetKind::Projects => &mut self.projects,
            SheetKind::Texts => &mut self.texts,
        };
        *slot = url;
    }

    /// Sheets that have a URL.
    pub fn configured(&self) -> Vec<SheetKind> {
        SheetKind::ALL
            .into_iter()
            .filter(|kind| self.url(*kind).is_some())
            .collect()
    }
}

/// Fetched body of every sheet. A sheet that failed or is not configured
/// holds an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTexts {
    pub profile: String,
    pub technologies: String,
    pub about: String,
    pub contact: String,
    pub projects: String,
    pub texts: String,
    /// Configured sheets whose fetch failed.
    pub unavailable: Vec<SheetKind>,
}

impl SheetTexts {
    pub fn get(&self, kind: SheetKind) -> &str {
        match kind {
            SheetKind::Profile => &self.profile,
            SheetKind::Technologies => &self.technologies,
            SheetKind::About => &self.about,
            SheetKind::Contact => &self.contact,
            SheetKind::Projects => &self.projects,
            SheetKind::Texts => &self.texts,
        }
    }

    pub fn with(mut self, kind: SheetKind, text: impl Into<String>) -> Self {
        let text = text.into();
        match kind {
            SheetKind::Profile => self.profile = text,
            SheetKind::Technologies => self.technologies = text,
            SheetKind::About => self.about = text,
            SheetKind::Contact => self.contact = text,
            SheetKind::Projects => self.projects = text,
            SheetKind::Texts => self.texts = text,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_lists_only_set_urls() {
        let mut sources = SheetSources::default();
        sources.set(SheetKind::Projects, Some("https://example.com/p.csv".into()));
        sources.set(SheetKind::Texts, Some("https://example.com/t.csv".into()));
        assert_eq!(sources.configured(), vec![SheetKind::Projects, SheetKind::Texts]);
        assert_eq!(sources.url(SheetKind::Projects), Some("https://example.com/p.csv"));
        assert_eq!(sources.url(SheetKind::Profile), None);
    }

    #[test]
    fn test_sheet_texts_builder() {
        let texts = SheetTexts::default().with(SheetKind::About, "Curso,Rust,Online,2024");
        assert_eq!(texts.get(SheetKind::About), "Curso,Rust,Online,2024");
        assert_eq!(texts.get(SheetKind::Profile), "");
    }
}
