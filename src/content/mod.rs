//! Site catalogs. The JSON under `content/` is compiled into the binary and
//! validated once on first access.

pub mod models;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CatalogError, ContentError};
use crate::selection::{Catalog, Record};

pub use models::{App, FaqEntry, Project, ProjectFilter, Video};

const APPS_JSON: &str = include_str!("../../content/apps.json");
const PROJECTS_JSON: &str = include_str!("../../content/projects.json");
const FAQ_JSON: &str = include_str!("../../content/faq.json");
const VIDEOS_JSON: &str = include_str!("../../content/videos.json");

static SITE_CONTENT: Lazy<Result<SiteContent, ContentError>> = Lazy::new(|| {
    let content = SiteContent::load();
    match &content {
        Ok(content) => log::info!(
            "Loaded site content: {} apps, {} projects, {} faq entries, {} videos",
            content.apps.len(),
            content.projects.len(),
            content.faq.len(),
            content.videos.len()
        ),
        Err(e) => log::error!("Failed to load site content: {}", e),
    }
    content
});

/// Shared, read-only site content.
pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    Lazy::force(&SITE_CONTENT).as_ref()
}

#[derive(Deserialize)]
struct CatalogFile<R> {
    #[serde(default)]
    default: Option<String>,
    items: Vec<R>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub apps: Catalog<App>,
    pub projects: Catalog<Project>,
    pub faq: Catalog<FaqEntry>,
    pub videos: Catalog<Video>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(APPS_JSON, PROJECTS_JSON, FAQ_JSON, VIDEOS_JSON)
    }

    pub fn from_json(apps: &str, projects: &str, faq: &str, videos: &str) -> Result<Self, ContentError> {
        Ok(Self {
            apps: parse_exclusive("apps", apps)?,
            projects: parse_catalog("projects", projects)?,
            faq: parse_catalog("faq", faq)?,
            videos: parse_catalog("videos", videos)?,
        })
    }
}

fn read_file<R: DeserializeOwned>(catalog: &'static str, json: &str) -> Result<CatalogFile<R>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { catalog, source })
}

fn parse_catalog<R>(catalog: &'static str, json: &str) -> Result<Catalog<R>, ContentError>
where
    R: DeserializeOwned + Record,
{
    let file = read_file::<R>(catalog, json)?;
    Catalog::new(file.items).map_err(|source| ContentError::Invalid { catalog, source })
}

/// Catalogs behind a tab switcher must name the tab shown on mount.
fn parse_exclusive<R>(catalog: &'static str, json: &str) -> Result<Catalog<R>, ContentError>
where
    R: DeserializeOwned + Record,
{
    let file = read_file::<R>(catalog, json)?;
    let default = file.default.ok_or_else(|| ContentError::Invalid {
        catalog,
        source: CatalogError::NoDefault,
    })?;
    Catalog::with_default(file.items, &default).map_err(|source| ContentError::Invalid { catalog, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{filter, pick, FilterTag};
    use std::collections::HashSet;

    #[test]
    fn shipped_content_loads() {
        let content = SiteContent::load().unwrap();
        assert!(!content.apps.is_empty());
        assert!(!content.projects.is_empty());
        assert_eq!(content.faq.len(), 8);
        assert!(!content.videos.is_empty());
    }

    #[test]
    fn shared_content_is_available() {
        assert!(site_content().is_ok());
    }

    #[test]
    fn apps_default_tab_exists() {
        let content = SiteContent::load().unwrap();
        let default = content.apps.default_key().unwrap();
        assert!(pick(&content.apps, default).is_some());
    }

    #[test]
    fn every_project_is_reachable_from_a_filter() {
        let content = SiteContent::load().unwrap();
        let mut seen = HashSet::new();
        for tag in ProjectFilter::VOCABULARY.iter().filter(|tag| !tag.is_all()) {
            for project in filter(&content.projects, tag) {
                seen.insert(project.id.clone());
            }
        }
        assert_eq!(seen.len(), content.projects.len());
    }

    #[test]
    fn fullstack_filter_matches_category_field() {
        let content = SiteContent::load().unwrap();
        let fullstack = filter(&content.projects, &ProjectFilter::Fullstack);
        assert!(!fullstack.is_empty());
        assert!(fullstack.iter().all(|p| p.category == "fullstack"));
    }

    #[test]
    fn missing_default_is_rejected() {
        let apps = r#"{"default":"ghost","items":[{"id":"a","name":"A","tagline":"","description":"","category":"utility"}]}"#;
        let err = SiteContent::from_json(apps, PROJECTS_JSON, FAQ_JSON, VIDEOS_JSON).unwrap_err();
        match err {
            ContentError::Invalid { catalog, source } => {
                assert_eq!(catalog, "apps");
                assert_eq!(source, CatalogError::MissingDefault("ghost".to_string()));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn undeclared_default_is_rejected() {
        let apps = r#"{"items":[{"id":"a","name":"A","tagline":"","description":"","category":"utility"}]}"#;
        let err = SiteContent::from_json(apps, PROJECTS_JSON, FAQ_JSON, VIDEOS_JSON).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid { source: CatalogError::NoDefault, .. }
        ));
    }

    #[test]
    fn duplicate_faq_ids_are_rejected() {
        let faq = r#"{"items":[{"id":"1","question":"q","answer":"a"},{"id":"1","question":"q2","answer":"a2"}]}"#;
        let err = SiteContent::from_json(APPS_JSON, PROJECTS_JSON, faq, VIDEOS_JSON).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid { catalog: "faq", source: CatalogError::DuplicateId(_) }
        ));
    }

    #[test]
    fn malformed_json_names_the_catalog() {
        let err = SiteContent::from_json(APPS_JSON, PROJECTS_JSON, FAQ_JSON, "{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { catalog: "videos", .. }));
        assert!(err.to_string().starts_with("Failed to parse videos catalog"));
    }
}
