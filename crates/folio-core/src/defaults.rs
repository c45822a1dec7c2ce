//! Fallback content used when a sheet is empty or unavailable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::*;

/// Content the portfolio shows when the sheets contribute nothing.
///
/// Each collection is replaced as a whole by its sheet counterpart when the
/// sheet yields at least one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub profile: ProfileRecord,
    pub projects: Vec<ProjectRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub skills: Vec<String>,
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub courses: Vec<CourseRecord>,
}

impl Defaults {
    /// Load defaults from a JSON file. Missing sections are empty.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Content shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            profile: ProfileRecord {
                name: "ALEXANDRE SILVA".into(),
                role: "Especialista em B.I. & Dados".into(),
                bio: "Transformo dados complexos em insights acionáveis através de visualizações limpas e engenharia de dados robusta.".into(),
                about_text: String::new(),
                avatar: "https://picsum.photos/id/1005/400/400".into(),
                banner: "https://picsum.photos/id/197/800/300".into(),
                social: SocialLinks {
                    linkedin: "https://linkedin.com".into(),
                    github: "https://github.com".into(),
                    email: "contato@alexandresilva.dev".into(),
                },
            },
            projects: vec![
                project(
                    "p1",
                    "Dashboard de Vendas Corporativas",
                    "Business Intelligence",
                    48,
                    [20, 3],
                    "Um dashboard interativo completo desenvolvido no Power BI para monitorar KPIs de vendas em tempo real. Inclui análise de coorte e projeção de faturamento.",
                    &["Power BI", "SQL", "DAX"],
                    "https://google.com",
                ),
                project(
                    "p2",
                    "Pipeline de ETL Automatizado",
                    "Engenharia de Dados",
                    60,
                    [180, 96],
                    "Automação de processamento de dados utilizando Python e Airflow, reduzindo o tempo de carga de dados em 70%.",
                    &["Python", "Airflow", "AWS"],
                    "https://github.com",
                ),
                project(
                    "p3",
                    "Análise de Sentimento de Mercado",
                    "Data Science",
                    119,
                    [201, 4],
                    "Modelo de NLP para analisar sentimentos em redes sociais sobre lançamentos de produtos tecnológicos.",
                    &["Python", "Pandas", "Scikit-Learn"],
                    "https://github.com",
                ),
                project(
                    "p4",
                    "Relatório Financeiro Q3",
                    "Reporting",
                    20,
                    [1, 160],
                    "Relatório executivo automatizado gerado via scripts R Markdown para diretoria financeira.",
                    &["R", "Excel", "VBA"],
                    "#",
                ),
            ],
            experiences: vec![
                experience(
                    "1",
                    "Senior Data Analyst",
                    "Tech Solutions Inc.",
                    "2021 - Presente",
                    "Liderança na migração de dashboards para Power BI, otimizando a tomada de decisão em 40%.",
                ),
                experience(
                    "2",
                    "BI Analyst",
                    "Retail Group",
                    "2019 - 2021",
                    "Desenvolvimento de pipelines ETL em Python e SQL para análise de vendas diárias.",
                ),
                experience(
                    "3",
                    "Junior Data Scientist",
                    "StartUp Data",
                    "2018 - 2019",
                    "Análise preditiva de churn de clientes utilizando modelos de Machine Learning.",
                ),
            ],
            skills: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            courses: Vec::new(),
        }
    }
}

/// Picsum-hosted sample project: thumbnail at 800x450, gallery at 800x600.
#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    category: &str,
    cover: u32,
    extra: [u32; 2],
    description: &str,
    technologies: &[&str],
    link: &str,
) -> ProjectRecord {
    let gallery = |photo: u32| format!("https://picsum.photos/id/{}/800/600", photo);
    ProjectRecord {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        thumbnail: format!("https://picsum.photos/id/{}/800/450", cover),
        images: vec![gallery(cover), gallery(extra[0]), gallery(extra[1])],
        description: description.into(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: Some(link.into()),
    }
}

fn experience(
    id: &str,
    role: &str,
    company: &str,
    period: &str,
    description: &str,
) -> ExperienceRecord {
    ExperienceRecord {
        id: id.into(),
        role: role.into(),
        company: company.into(),
        period: period.into(),
        description: description.into(),
    }
}
