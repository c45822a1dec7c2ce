//! Per-sheet row classifiers.
//!
//! Each function reads one sheet's text and produces only its own slice of
//! the content model; none of them can fail.

use std::collections::{HashMap, HashSet};

use folio_core::{
    CertificationRecord, CourseRecord, EducationRecord, IdStrategy, ProfileRecord,
    ProjectRecord, SkillSet,
};
use sha2::{Digest, Sha256};

use crate::csv::{clean_text, lines, split_csv_line};
use crate::fields::{is_reserved_skill_key, normalize_key, AboutRowKind, ProfileField};
use crate::url::normalize_url;

/// Category used when a project row leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Thumbnail used when a project row has no image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+Image";

/// Header token of the projects sheet's title column.
const TITLE_HEADER: &str = "title";

// ---------------------------------------------------------------
// Ids
// ---------------------------------------------------------------

/// Generates `<prefix>-sheet-<n>` ids for one sheet.
struct IdGenerator {
    strategy: IdStrategy,
    used: HashSet<String>,
}

impl IdGenerator {
    fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            used: HashSet::new(),
        }
    }

    fn next(&mut self, prefix: &str, index: usize, fields: &[String]) -> String {
        let base = match self.strategy {
            IdStrategy::Row => format!("{}-sheet-{}", prefix, index),
            IdStrategy::Hash => {
                let digest = Sha256::digest(fields.join("\u{1f}").as_bytes());
                format!("{}-sheet-{}", prefix, &hex::encode(digest)[..12])
            }
        };

        // Identical rows hash alike; keep ids unique within the sheet.
        let mut id = base.clone();
        let mut n = 1;
        while !self.used.insert(id.clone()) {
            n += 1;
            id = format!("{}-{}", base, n);
        }
        id
    }
}

// ---------------------------------------------------------------
// Key/value sheets (profile, contact, texts)
// ---------------------------------------------------------------

/// Profile values contributed by one sheet. Later rows override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    values: HashMap<ProfileField, String>,
}

impl ProfileDraft {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        self.values.insert(field, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `(key, value)` of every row with a non-empty second cell.
fn key_values(text: &str) -> impl Iterator<Item = (String, String)> + '_ {
    lines(text).filter_map(|(_, line)| {
        let mut parts = split_csv_line(&line).into_iter();
        let key = parts.next()?;
        let value = parts.next()?;
        (!value.is_empty()).then_some((key, value))
    })
}

/// Free-text sheet: name, role, bio and about text.
pub fn parse_texts(text: &str) -> ProfileDraft {
    let mut draft = ProfileDraft::default();
    for (key, value) in key_values(text) {
        if let Some(field) = ProfileField::resolve(&key).filter(ProfileField::is_text) {
            draft.set(field, value);
        }
    }
    draft
}

/// Profile sheet: every profile field; images are normalized.
pub fn parse_profile(text: &str) -> ProfileDraft {
    let mut draft = ProfileDraft::default();
    for (key, value) in key_values(text) {
        if let Some(field) = ProfileField::resolve(&key) {
            let value = if field.is_image() {
                normalize_url(&value)
            } else {
                value
            };
            if !value.is_empty() {
                draft.set(field, value);
            }
        }
    }
    draft
}

/// Contact sheet: social links only.
pub fn parse_contact(text: &str) -> ProfileDraft {
    let mut draft = ProfileDraft::default();
    for (key, value) in key_values(text) {
        if let Some(field) = ProfileField::resolve_social(&key) {
            draft.set(field, value);
        }
    }
    draft
}

/// Combine the three key/value sheets over the default profile.
///
/// Precedence per slot: texts > profile for name/role/bio/about text,
/// contact > profile for social links, profile alone for images. A slot no
/// sheet sets keeps its default.
pub fn resolve_profile(
    texts: &ProfileDraft,
    profile: &ProfileDraft,
    contact: &ProfileDraft,
    defaults: &ProfileRecord,
) -> ProfileRecord {
    let pick = |field: ProfileField, default: &str| -> String {
        let layers = if field.is_text() {
            vec![texts, profile]
        } else if field.is_social() {
            vec![contact, profile]
        } else {
            vec![profile]
        };
        layers
            .iter()
            .find_map(|draft| draft.get(field))
            .unwrap_or(default)
            .to_string()
    };

    let mut record = defaults.clone();
    record.name = pick(ProfileField::Name, &defaults.name);
    record.role = pick(ProfileField::Role, &defaults.role);
    record.bio = pick(ProfileField::Bio, &defaults.bio);
    record.about_text = pick(ProfileField::AboutText, &defaults.about_text);
    record.avatar = pick(ProfileField::Avatar, &defaults.avatar);
    record.banner = pick(ProfileField::Banner, &defaults.banner);
    record.social.linkedin = pick(ProfileField::Linkedin, &defaults.social.linkedin);
    record.social.github = pick(ProfileField::Github, &defaults.social.github);
    record.social.email = pick(ProfileField::Email, &defaults.social.email);
    record
}

// ---------------------------------------------------------------
// Technologies
// ---------------------------------------------------------------

/// One skill per row, first cell, reserved keys skipped.
pub fn parse_skills(text: &str) -> SkillSet {
    let mut skills = SkillSet::new();
    for (_, line) in lines(text) {
        let parts = split_csv_line(&line);
        let candidate = &parts[0];
        if !candidate.is_empty() && !is_reserved_skill_key(candidate) {
            skills.insert(candidate.clone());
        }
    }
    skills
}

// ---------------------------------------------------------------
// About me
// ---------------------------------------------------------------

/// Timeline entries read from the about-me sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutSections {
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub courses: Vec<CourseRecord>,
}

/// Typed rows `<type>,<label>,<label>,<period>`. Unknown types are ignored.
///
/// Ids use the row's line index within the sheet.
pub fn parse_about(text: &str, strategy: IdStrategy) -> AboutSections {
    let mut sections = AboutSections::default();
    let mut ids = IdGenerator::new(strategy);

    for (index, line) in lines(text) {
        let parts = split_csv_line(&line);
        if parts.len() < 2 {
            continue;
        }
        let Some(kind) = AboutRowKind::resolve(&parts[0]) else {
            continue;
        };

        let cell = |i: usize| parts.get(i).cloned().unwrap_or_default();
        let id = ids.next(kind.id_prefix(), index, &parts);
        match kind {
            AboutRowKind::Education => sections.education.push(EducationRecord {
                id,
                degree: cell(1),
                institution: cell(2),
                period: cell(3),
            }),
            AboutRowKind::Certification => sections.certifications.push(CertificationRecord {
                id,
                name: cell(1),
                issuer: cell(2),
                year: cell(3),
            }),
            AboutRowKind::Course => sections.courses.push(CourseRecord {
                id,
                title: cell(1),
                institution: cell(2),
                year: cell(3),
            }),
        }
    }

    sections
}

// ---------------------------------------------------------------
// Projects
// ---------------------------------------------------------------

/// Project table `title,category,technologies,description,link,img1,img2,img3`.
///
/// The header row and rows without a title are skipped; ids count accepted
/// rows only.
pub fn parse_projects(text: &str, strategy: IdStrategy) -> Vec<ProjectRecord> {
    let mut projects = Vec::new();
    let mut ids = IdGenerator::new(strategy);

    for (_, line) in lines(text) {
        let parts = split_csv_line(&line);
        let title = parts[0].clone();
        if title.is_empty() || normalize_key(&title) == TITLE_HEADER {
            continue;
        }

        let cell = |i: usize| parts.get(i).map(String::as_str).unwrap_or("");

        let category = match cell(1) {
            "" => DEFAULT_CATEGORY.to_string(),
            c => c.to_string(),
        };
        let technologies = cell(2)
            .split(',')
            .map(clean_text)
            .filter(|t| !t.is_empty())
            .collect();
        let link = Some(cell(4).to_string()).filter(|l| !l.is_empty());

        let mut images: Vec<String> = (5..=7)
            .map(|i| normalize_url(cell(i)))
            .filter(|u| !u.is_empty())
            .collect();
        let thumbnail = images
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        if images.is_empty() {
            images.push(thumbnail.clone());
        }

        let id = ids.next("proj", projects.len(), &parts);
        projects.push(ProjectRecord {
            id,
            title,
            category,
            thumbnail,
            images,
            description: cell(3).to_string(),
            technologies,
            link,
        });
    }

    projects
}
