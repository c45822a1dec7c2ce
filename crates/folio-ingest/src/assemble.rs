//! Content assembly: every sheet parsed independently, then merged over the defaults.

use folio_core::{ContentModel, Defaults, IdStrategy, SheetTexts};
use serde::Serialize;
use tracing::debug;

use crate::sources::{
    parse_about, parse_contact, parse_profile, parse_projects, parse_skills, parse_texts,
    resolve_profile,
};

/// Where a collection of the assembled model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionOrigin {
    Sheet,
    Defaults,
}

/// Origin of each replaceable collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionOrigins {
    pub projects: CollectionOrigin,
    pub skills: CollectionOrigin,
    pub education: CollectionOrigin,
    pub certifications: CollectionOrigin,
    pub courses: CollectionOrigin,
}

/// Result of one assembly: the model plus where its collections came from.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub content: ContentModel,
    pub origins: CollectionOrigins,
}

/// Build the content model from fetched sheet texts.
///
/// Collections are replaced whole: a non-empty sheet collection wins,
/// otherwise the default collection is used unmodified. Experiences are
/// never read from sheets.
pub fn assemble(texts: &SheetTexts, defaults: &Defaults, strategy: IdStrategy) -> Assembly {
    let profile = resolve_profile(
        &parse_texts(&texts.texts),
        &parse_profile(&texts.profile),
        &parse_contact(&texts.contact),
        &defaults.profile,
    );

    let about = parse_about(&texts.about, strategy);
    let (projects, projects_origin) =
        or_default(parse_projects(&texts.projects, strategy), &defaults.projects);
    let (skills, skills_origin) =
        or_default(parse_skills(&texts.technologies).into_vec(), &defaults.skills);
    let (education, education_origin) = or_default(about.education, &defaults.education);
    let (certifications, certifications_origin) =
        or_default(about.certifications, &defaults.certifications);
    let (courses, courses_origin) = or_default(about.courses, &defaults.courses);

    debug!(
        "Assembled content: {} projects, {} skills, {} education, {} certifications, {} courses",
        projects.len(),
        skills.len(),
        education.len(),
        certifications.len(),
        courses.len()
    );

    Assembly {
        content: ContentModel {
            profile,
            projects,
            experiences: defaults.experiences.clone(),
            skills,
            education,
            certifications,
            courses,
        },
        origins: CollectionOrigins {
            projects: projects_origin,
            skills: skills_origin,
            education: education_origin,
            certifications: certifications_origin,
            courses: courses_origin,
        },
    }
}

fn or_default<T: Clone>(parsed: Vec<T>, default: &[T]) -> (Vec<T>, CollectionOrigin) {
    if parsed.is_empty() {
        (default.to_vec(), CollectionOrigin::Defaults)
    } else {
        (parsed, CollectionOrigin::Sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SheetKind;

    fn defaults_with_skills() -> Defaults {
        Defaults {
            skills: vec!["Excel".into(), "SQL".into()],
            ..Defaults::builtin()
        }
    }

    #[test]
    fn test_all_empty_uses_defaults() {
        let defaults = defaults_with_skills();
        let assembly = assemble(&SheetTexts::default(), &defaults, IdStrategy::Row);
        let content = assembly.content;

        assert_eq!(content.profile, defaults.profile);
        assert_eq!(content.projects, defaults.projects);
        assert_eq!(content.experiences, defaults.experiences);
        assert_eq!(content.skills, vec!["Excel", "SQL"]);
        assert!(content.education.is_empty());
        assert_eq!(assembly.origins.projects, CollectionOrigin::Defaults);
        assert_eq!(assembly.origins.skills, CollectionOrigin::Defaults);
    }

    #[test]
    fn test_sheet_collection_replaces_whole() {
        let defaults = defaults_with_skills();
        let texts = SheetTexts::default()
            .with(SheetKind::Technologies, "Rust\nSQL\nRust")
            .with(SheetKind::Projects, "title,category\nDemo,,Go");

        let assembly = assemble(&texts, &defaults, IdStrategy::Row);
        // Replacement, not union: "Excel" from the defaults is gone.
        assert_eq!(assembly.content.skills, vec!["Rust", "SQL"]);
        assert_eq!(assembly.content.projects.len(), 1);
        assert_eq!(assembly.content.projects[0].id, "proj-sheet-0");
        assert_eq!(assembly.origins.skills, CollectionOrigin::Sheet);
        assert_eq!(assembly.origins.projects, CollectionOrigin::Sheet);
    }

    #[test]
    fn test_empty_technologies_keeps_default_skills() {
        let defaults = defaults_with_skills();
        let texts = SheetTexts::default().with(SheetKind::Technologies, "tecnologias\navatar");
        let assembly = assemble(&texts, &defaults, IdStrategy::Row);
        assert_eq!(assembly.content.skills, defaults.skills);
    }

    #[test]
    fn test_profile_and_about_sheets() {
        let texts = SheetTexts::default()
            .with(SheetKind::Texts, "nome,Ana\nsobre,Analista de dados")
            .with(SheetKind::Profile, "nome,Ignored\ncargo,Analista\nlinkedin,https://li/ana")
            .with(SheetKind::Contact, "linkedin,https://li/ana-contact")
            .with(SheetKind::About, "Formação,Estatística,USP,2018\nCurso,Rust,Online,2024");

        let assembly = assemble(&texts, &Defaults::default(), IdStrategy::Row);
        let content = assembly.content;
        assert_eq!(content.profile.name, "Ana");
        assert_eq!(content.profile.role, "Analista");
        assert_eq!(content.profile.about_text, "Analista de dados");
        assert_eq!(content.profile.social.linkedin, "https://li/ana-contact");
        assert_eq!(content.education[0].id, "edu-sheet-0");
        assert_eq!(content.courses[0].id, "course-sheet-1");
        assert!(content.certifications.is_empty());
        assert_eq!(assembly.origins.certifications, CollectionOrigin::Defaults);
    }
}
