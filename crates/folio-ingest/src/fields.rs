//! Canonical field names and the label spellings accepted for them.
//!
//! Sheets are authored by hand, in Portuguese or English, so every slot is
//! reached through one alias table instead of ad-hoc string comparisons.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Profile slot addressed by a key/value row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Role,
    Bio,
    AboutText,
    Avatar,
    Banner,
    Linkedin,
    Github,
    Email,
}

const PROFILE_ALIASES: &[(&str, ProfileField)] = &[
    ("name", ProfileField::Name),
    ("nome", ProfileField::Name),
    ("role", ProfileField::Role),
    ("cargo", ProfileField::Role),
    ("bio", ProfileField::Bio),
    ("biografia", ProfileField::Bio),
    ("sobre", ProfileField::AboutText),
    ("sobre mim", ProfileField::AboutText),
    ("about", ProfileField::AboutText),
    ("about me", ProfileField::AboutText),
    ("avatar", ProfileField::Avatar),
    ("foto", ProfileField::Avatar),
    ("banner", ProfileField::Banner),
    ("capa", ProfileField::Banner),
    ("linkedin", ProfileField::Linkedin),
    ("github", ProfileField::Github),
    ("email", ProfileField::Email),
    ("e-mail", ProfileField::Email),
];

static PROFILE_LOOKUP: Lazy<HashMap<&'static str, ProfileField>> =
    Lazy::new(|| PROFILE_ALIASES.iter().copied().collect());

impl ProfileField {
    /// Resolve a row key (any case, trailing colons allowed).
    pub fn resolve(key: &str) -> Option<Self> {
        PROFILE_LOOKUP.get(normalize_key(key).as_str()).copied()
    }

    /// Like [`resolve`](Self::resolve), but for social links also accept keys
    /// that merely contain the network name ("LinkedIn URL", "Email de contato").
    pub fn resolve_social(key: &str) -> Option<Self> {
        let key = normalize_key(key);
        if let Some(field) = PROFILE_LOOKUP.get(key.as_str()).copied() {
            return field.is_social().then_some(field);
        }
        [
            ("linkedin", Self::Linkedin),
            ("github", Self::Github),
            ("email", Self::Email),
        ]
        .into_iter()
        .find(|(needle, _)| key.contains(needle))
        .map(|(_, field)| field)
    }

    pub fn is_social(&self) -> bool {
        matches!(self, Self::Linkedin | Self::Github | Self::Email)
    }

    /// Fields the free-text sheet is allowed to set.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Role | Self::Bio | Self::AboutText)
    }

    /// Values that are image URLs and go through the normalizer.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Avatar | Self::Banner)
    }
}

/// Lowercase, drop colons, trim.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace(':', "").trim().to_string()
}

/// Lowercase and strip accents so "Formação" matches "formacao".
pub fn fold_diacritics(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Row type of the about-me sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutRowKind {
    Education,
    Certification,
    Course,
}

impl AboutRowKind {
    /// Match a discriminator cell. Unknown types return `None`.
    pub fn resolve(cell: &str) -> Option<Self> {
        match fold_diacritics(cell).as_str() {
            "formacao" | "education" => Some(Self::Education),
            "certificacao" | "certification" => Some(Self::Certification),
            "curso" | "course" => Some(Self::Course),
            _ => None,
        }
    }

    /// Prefix of the generated record id.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Education => "edu",
            Self::Certification => "cert",
            Self::Course => "course",
        }
    }
}

/// First cells that are configuration keys, not skills.
const RESERVED_SKILL_KEYS: &[&str] = &[
    "avatar",
    "banner",
    "bio",
    "name",
    "nome",
    "role",
    "cargo",
    "linkedin",
    "github",
    "email",
    "social",
    "technologies",
    "tecnologias",
    "key",
    "value",
    "sobre",
];

/// Whether a technologies-sheet cell is a stray header/config key.
pub fn is_reserved_skill_key(cell: &str) -> bool {
    let lower = cell.to_lowercase();
    RESERVED_SKILL_KEYS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bilingual() {
        assert_eq!(ProfileField::resolve("Nome"), Some(ProfileField::Name));
        assert_eq!(ProfileField::resolve("NAME:"), Some(ProfileField::Name));
        assert_eq!(ProfileField::resolve(" cargo: "), Some(ProfileField::Role));
        assert_eq!(ProfileField::resolve("Sobre"), Some(ProfileField::AboutText));
        assert_eq!(ProfileField::resolve("E-mail"), Some(ProfileField::Email));
        assert_eq!(ProfileField::resolve("telefone"), None);
    }

    #[test]
    fn test_resolve_social_contains() {
        assert_eq!(
            ProfileField::resolve_social("LinkedIn URL"),
            Some(ProfileField::Linkedin)
        );
        assert_eq!(
            ProfileField::resolve_social("Meu GitHub"),
            Some(ProfileField::Github)
        );
        assert_eq!(
            ProfileField::resolve_social("e-mail"),
            Some(ProfileField::Email)
        );
        assert_eq!(ProfileField::resolve_social("nome"), None);
    }

    #[test]
    fn test_about_row_kind_accents() {
        assert_eq!(AboutRowKind::resolve("Formação"), Some(AboutRowKind::Education));
        assert_eq!(
            AboutRowKind::resolve("CERTIFICAÇÃO"),
            Some(AboutRowKind::Certification)
        );
        assert_eq!(AboutRowKind::resolve("curso"), Some(AboutRowKind::Course));
        assert_eq!(AboutRowKind::resolve("Experiência"), None);
    }

    #[test]
    fn test_reserved_skill_keys() {
        assert!(is_reserved_skill_key("Avatar"));
        assert!(is_reserved_skill_key("TECNOLOGIAS"));
        assert!(!is_reserved_skill_key("Power BI"));
    }
}
