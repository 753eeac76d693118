mod badges;

pub use badges::{Badge, LevelBand};

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BUNDLE_NAME: &str = "portfolio.json";

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content bundle not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content bundle: {0}")]
    Parse(String),
    #[error("Duplicate id `{id}` in {collection}")]
    DuplicateId { collection: &'static str, id: String },
    #[error("Skill `{skill}` has level {level}, expected 0-100")]
    LevelOutOfRange { skill: String, level: u8 },
}

/// Behavioural knobs for the page. Every field falls back to the value the
/// landing page has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub teardown_delay_ms: u64,
    pub reveal_delay_ms: u64,
    pub mobile_breakpoint_px: u32,
    pub preview_limit: usize,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            teardown_delay_ms: 300,
            reveal_delay_ms: 500,
            mobile_breakpoint_px: 640,
            preview_limit: 3,
        }
    }
}

impl SiteSettings {
    /// Media query matching viewports narrower than the mobile breakpoint.
    pub fn mobile_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint_px.saturating_sub(1))
    }

    pub fn is_mobile_width(&self, width: f64) -> bool {
        width < f64::from(self.mobile_breakpoint_px)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub photo: String,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub journey_summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "DevOps/Cloud Engineer")]
    DevOpsCloud,
    #[serde(rename = "Cybersecurity Engineer")]
    Cybersecurity,
    #[serde(other)]
    Other,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SoftwareEngineer, Role::DevOpsCloud, Role::Cybersecurity];

    pub fn label(&self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
            Role::DevOpsCloud => "DevOps/Cloud Engineer",
            Role::Cybersecurity => "Cybersecurity Engineer",
            Role::Other => "Engineer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertCategory {
    Cloud,
    Security,
    Development,
    DevOps,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    pub image: String,
    pub category: CertCategory,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyKind {
    Degree,
    Course,
    Bootcamp,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: StudyKind,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentKind {
    FullTime,
    Contract,
    Freelance,
    Internship,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(rename = "type")]
    pub kind: EmploymentKind,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillDomain {
    Frontend,
    Backend,
    DevOps,
    Security,
    Cloud,
    Database,
    Tools,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    #[serde(rename = "category")]
    pub domain: SkillDomain,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    #[serde(rename = "color")]
    pub accent: Accent,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyKind {
    Startup,
    Current,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyStatus {
    Active,
    Acquired,
    Sold,
    #[serde(other)]
    Other,
}

impl CompanyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "Active",
            CompanyStatus::Acquired => "Acquired",
            CompanyStatus::Sold => "Sold",
            CompanyStatus::Other => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CompanyKind,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub icon: String,
    pub year: String,
    pub status: CompanyStatus,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub id: String,
    pub nav_label: String,
    pub role: String,
    pub summary: String,
    pub image: String,
    #[serde(default)]
    pub image_side: ImageSide,
    pub technologies: Vec<Technology>,
}

/// Any record that can be shown in a detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Project(Project),
    Certification(Certification),
    Study(Study),
    Experience(Experience),
    Company(Company),
}

impl ContentItem {
    pub fn id(&self) -> String {
        match self {
            ContentItem::Project(p) => p.id.clone(),
            ContentItem::Certification(c) => c.id.clone(),
            ContentItem::Study(s) => s.id.clone(),
            ContentItem::Experience(e) => e.id.clone(),
            ContentItem::Company(c) => c.id.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Project(p) => &p.title,
            ContentItem::Certification(c) => &c.title,
            ContentItem::Study(s) => &s.title,
            ContentItem::Experience(e) => &e.title,
            ContentItem::Company(c) => &c.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ContentItem::Project(p) => &p.description,
            ContentItem::Certification(c) => &c.description,
            ContentItem::Study(s) => &s.description,
            ContentItem::Experience(e) => &e.description,
            ContentItem::Company(c) => &c.description,
        }
    }

    /// Category or type label shown in the item's badge.
    pub fn category_label(&self) -> String {
        match self {
            ContentItem::Project(_) => "Project".to_string(),
            ContentItem::Certification(c) => c.category.badge().label.to_string(),
            ContentItem::Study(s) => s.kind.badge().label.to_string(),
            ContentItem::Experience(e) => e.kind.badge().label.to_string(),
            ContentItem::Company(c) => c.status.label().to_string(),
        }
    }

    /// Ordered tag list: skills, technologies, or roles depending on the record.
    pub fn tags(&self) -> Vec<String> {
        match self {
            ContentItem::Project(p) => p.roles.iter().map(|r| r.label().to_string()).collect(),
            ContentItem::Certification(c) => c.skills.clone(),
            ContentItem::Study(s) => s.skills.clone(),
            ContentItem::Experience(e) => e.technologies.clone(),
            ContentItem::Company(c) => c.technologies.clone(),
        }
    }
}

/// First `limit` tags plus how many were left out.
pub fn split_preview(tags: &[String], limit: usize) -> (&[String], usize) {
    let shown = limit.min(tags.len());
    (&tags[..shown], tags.len() - shown)
}

pub const FIXED_SECTIONS: [&str; 6] = [
    "Introduction",
    "Projects",
    "Certifications",
    "Skills",
    "Experience",
    "About",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub site: SiteSettings,
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub studies: Vec<Study>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub stacks: Vec<TechStack>,
}

static SHARED: LazyLock<Result<Arc<Portfolio>, ContentError>> = LazyLock::new(|| {
    let loaded = Portfolio::load().map(Arc::new);
    if let Err(e) = &loaded {
        log::error!("portfolio content unavailable: {e}");
    }
    loaded
});

impl Portfolio {
    /// The embedded bundle, parsed and validated once per process.
    pub fn shared() -> Result<Arc<Self>, ContentError> {
        SHARED.clone()
    }

    /// Loads and validates the bundle embedded at build time.
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(BUNDLE_NAME)
            .ok_or_else(|| ContentError::NotFound(BUNDLE_NAME.to_string()))?;
        let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        log::debug!(
            "loaded portfolio: {} projects, {} certifications, {} companies",
            portfolio.projects.len(),
            portfolio.certifications.len(),
            portfolio.companies.len()
        );
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        unique_ids("projects", self.projects.iter().map(|p| p.id.clone()))?;
        unique_ids("certifications", self.certifications.iter().map(|c| c.id.clone()))?;
        unique_ids("studies", self.studies.iter().map(|s| s.id.clone()))?;
        unique_ids("experiences", self.experiences.iter().map(|e| e.id.clone()))?;
        unique_ids("companies", self.companies.iter().map(|c| c.id.to_string()))?;
        unique_ids("stacks", self.stacks.iter().map(|s| s.id.clone()))?;

        if let Some(skill) = self
            .skills
            .iter()
            .flat_map(|c| c.skills.iter())
            .find(|s| s.level > 100)
        {
            return Err(ContentError::LevelOutOfRange {
                skill: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }

    /// Navigation labels, one per rendered full-page section, in page order.
    pub fn section_titles(&self) -> Vec<String> {
        FIXED_SECTIONS
            .iter()
            .map(|s| s.to_string())
            .chain(self.stacks.iter().map(|s| s.nav_label.clone()))
            .collect()
    }
}

fn unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = String>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(ContentError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn certification(id: &str, skills: &[&str]) -> Certification {
        Certification {
            id: id.to_string(),
            title: format!("{id} title"),
            issuer: "Issuer".to_string(),
            date: "2023".to_string(),
            credential_id: None,
            image: "/cert.png".to_string(),
            category: CertCategory::Cloud,
            description: "A certification".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: "A project".to_string(),
            image: format!("/{id}.png"),
            roles: vec![Role::SoftwareEngineer],
            url: None,
        }
    }

    pub fn portfolio() -> Portfolio {
        Portfolio {
            site: SiteSettings::default(),
            profile: Profile {
                name: "Test Person".to_string(),
                photo: "/me.jpeg".to_string(),
                phrases: vec!["hello".to_string()],
                socials: vec![],
                journey_summary: String::new(),
                highlights: vec![],
            },
            projects: vec![project("dira"), project("vai")],
            certifications: vec![certification("aws-saa", &["AWS"])],
            studies: vec![],
            skills: vec![],
            experiences: vec![],
            companies: vec![],
            stacks: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_embedded_bundle_loads() {
        let portfolio = Portfolio::load().expect("embedded bundle should be valid");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.certifications.is_empty());
        assert!(!portfolio.studies.is_empty());
        assert!(!portfolio.experiences.is_empty());
        assert!(!portfolio.companies.is_empty());
        assert_eq!(portfolio.stacks.len(), 3);
        assert_eq!(portfolio.site, SiteSettings::default());
    }

    #[test]
    fn test_section_titles_follow_rendered_sections() {
        let loaded = Portfolio::load().unwrap();
        let titles = loaded.section_titles();
        assert_eq!(titles.len(), FIXED_SECTIONS.len() + loaded.stacks.len());
        assert_eq!(titles[0], "Introduction");
        assert_eq!(titles[5], "About");
        assert_eq!(titles[6], "DevOps");

        assert_eq!(portfolio().section_titles().len(), 6);
    }

    #[test]
    fn test_shared_bundle_is_parsed_once() {
        let first = Portfolio::shared().expect("embedded bundle should be valid");
        let second = Portfolio::shared().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, Portfolio::load().unwrap());
    }

    #[test]
    fn test_unknown_categories_fall_back() {
        let raw = r#"{
            "id": "x",
            "title": "Mystery",
            "issuer": "Someone",
            "date": "2024",
            "image": "/x.png",
            "category": "quantum",
            "description": "?"
        }"#;
        let cert: Certification = serde_json::from_str(raw).unwrap();
        assert_eq!(cert.category, CertCategory::Other);
        assert!(cert.skills.is_empty());
        assert_eq!(cert.credential_id, None);

        let exp: EmploymentKind = serde_json::from_str("\"full-time\"").unwrap();
        assert_eq!(exp, EmploymentKind::FullTime);
        let role: Role = serde_json::from_str("\"DevOps/Cloud Engineer\"").unwrap();
        assert_eq!(role, Role::DevOpsCloud);
        let role: Role = serde_json::from_str("\"Astronaut\"").unwrap();
        assert_eq!(role, Role::Other);
    }

    #[test]
    fn test_site_settings_defaults() {
        let settings: SiteSettings = serde_json::from_str(r#"{"teardown_delay_ms": 150}"#).unwrap();
        assert_eq!(settings.teardown_delay_ms, 150);
        assert_eq!(settings.reveal_delay_ms, 500);
        assert_eq!(settings.mobile_query(), "(max-width: 639px)");
        assert!(settings.is_mobile_width(639.0));
        assert!(!settings.is_mobile_width(640.0));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut portfolio = portfolio();
        portfolio.projects.push(project("dira"));
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::DuplicateId {
                collection: "projects",
                id: "dira".to_string()
            })
        );
    }

    #[test]
    fn test_skill_level_range() {
        let mut portfolio = portfolio();
        portfolio.skills.push(SkillCategory {
            name: "Backend".to_string(),
            icon: "⚙️".to_string(),
            accent: Accent::Green,
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: 120,
                domain: SkillDomain::Backend,
                icon: "🦀".to_string(),
                description: "Memory-safe systems programming".to_string(),
            }],
        });
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::LevelOutOfRange { level: 120, .. })
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Portfolio::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_content_item_accessors() {
        let item = ContentItem::Certification(certification("empty", &[]));
        assert_eq!(item.id(), "empty");
        assert_eq!(item.title(), "empty title");
        assert_eq!(item.category_label(), "Cloud");
        assert!(item.tags().is_empty());

        let item = ContentItem::Project(project("dira"));
        assert_eq!(item.tags(), vec!["Software Engineer".to_string()]);
    }

    #[test]
    fn test_split_preview() {
        let tags: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let (shown, rest) = split_preview(&tags, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 2);

        let (shown, rest) = split_preview(&tags[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(rest, 0);

        let (shown, rest) = split_preview(&[], 3);
        assert!(shown.is_empty());
        assert_eq!(rest, 0);
    }
}
