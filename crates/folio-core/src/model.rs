//! Portfolio content model: the JSON shape consumed by the page.

use serde::{Deserialize, Serialize};

/// Social links shown in the sidebar and contact view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub email: String,
}

/// Profile header: identity, texts and images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Extended "about me" text.
    pub about_text: String,
    pub avatar: String,
    pub banner: String,
    pub social: SocialLinks,
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub year: String,
}

/// Deduplicated skill list that keeps first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill. Returns false if it was already present.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.0.contains(&skill) {
            return false;
        }
        self.0.push(skill);
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

/// Everything the page renders, produced atomically by one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentModel {
    pub profile: ProfileRecord,
    pub projects: Vec<ProjectRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub skills: Vec<String>,
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub courses: Vec<CourseRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_set_dedup_keeps_order() {
        let skills: SkillSet = ["SQL", "Python", "SQL", "DAX"].into_iter().collect();
        assert_eq!(skills.as_slice(), &["SQL", "Python", "DAX"]);
        assert!(skills.contains("DAX"));
        assert!(!skills.contains("sql"));
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = ProfileRecord {
            about_text: "Sobre mim".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["aboutText"], "Sobre mim");
        assert!(json["social"]["linkedin"].is_string());
    }

    #[test]
    fn test_project_link_omitted_when_absent() {
        let project = ProjectRecord {
            id: "p1".into(),
            title: "Demo".into(),
            category: "Geral".into(),
            thumbnail: "t".into(),
            images: vec!["t".into()],
            description: String::new(),
            technologies: vec![],
            link: None,
        };
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("link").is_none());
    }
}
