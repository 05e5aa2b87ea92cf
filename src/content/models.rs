use serde::Deserialize;

use crate::selection::{FilterTag, Record, Tagged};

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct App {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub youtube_id: String,
}

impl Record for App {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for FaqEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Video {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Filter buttons above the project grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Website,
    Mobile,
    Fullstack,
}

impl ProjectFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Website => "Websites",
            ProjectFilter::Mobile => "Mobile Apps",
            ProjectFilter::Fullstack => "Full Stack",
        }
    }
}

impl FilterTag for ProjectFilter {
    const VOCABULARY: &'static [Self] = &[
        ProjectFilter::All,
        ProjectFilter::Website,
        ProjectFilter::Mobile,
        ProjectFilter::Fullstack,
    ];

    fn key(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Website => "website",
            ProjectFilter::Mobile => "mobile",
            ProjectFilter::Fullstack => "fullstack",
        }
    }

    fn is_all(&self) -> bool {
        matches!(self, ProjectFilter::All)
    }
}

// "website"/"mobile" live in `type`, "fullstack" in `category`; either
// field can satisfy a filter.
impl Tagged<ProjectFilter> for Project {
    fn has_tag(&self, tag: &ProjectFilter) -> bool {
        let key = tag.key();
        self.kind == key || self.category == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;

    fn project(kind: &str, category: &str) -> Project {
        Project {
            id: format!("{}-{}", kind, category),
            title: String::new(),
            description: String::new(),
            kind: kind.to_string(),
            category: category.to_string(),
            stack: Vec::new(),
            link: None,
        }
    }

    #[test]
    fn project_matches_on_either_field() {
        let p = project("website", "fullstack");
        assert!(p.has_tag(&ProjectFilter::Website));
        assert!(p.has_tag(&ProjectFilter::Fullstack));
        assert!(!p.has_tag(&ProjectFilter::Mobile));

        let m = project("mobile", "frontend");
        assert!(m.has_tag(&ProjectFilter::Mobile));
        assert!(!m.has_tag(&ProjectFilter::Fullstack));
    }

    #[test]
    fn project_grid_starts_on_all() {
        let selection = Selection::<ProjectFilter>::first_tag();
        assert_eq!(selection.active(), Some(&ProjectFilter::All));
        assert!(ProjectFilter::VOCABULARY[0].is_all());
    }

    #[test]
    fn project_type_field_is_renamed() {
        let p: Project = serde_json::from_str(
            r#"{"id":"x","title":"X","description":"","type":"mobile","category":"fullstack"}"#,
        )
        .unwrap();
        assert_eq!(p.kind, "mobile");
        assert!(p.stack.is_empty());
        assert!(p.link.is_none());
    }
}
