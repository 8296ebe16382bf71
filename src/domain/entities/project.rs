use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 1;
const MAX_TITLE_LENGTH: u64 = 120;
const MIN_DESCRIPTION_LENGTH: u64 = 1;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MAX_TECHNOLOGIES: u64 = 20;
const MAX_TECHNOLOGY_LENGTH: u64 = 50;

/// Closed set of catalog categories. Unknown wire values fail
/// deserialization and surface as a 400 through the JSON error handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    WebSystem,
    AndroidApp,
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectCategory::WebSystem => "web-system",
            ProjectCategory::AndroidApp => "android-app",
        };
        write!(f, "{s}")
    }
}

// ───── Catalog Record ────────────────────────────────────────────────

/// A stored catalog entry. `demoLink`/`githubLink` are camelCase on the
/// wire; everything else is snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    #[serde(rename = "demoLink")]
    pub demo_link: Option<String>,
    #[serde(rename = "githubLink")]
    pub github_link: Option<String>,
    pub featured: bool,
    pub bg_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"),
        custom(function = validate_title)
    )]
    pub title: String,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH, max = MAX_DESCRIPTION_LENGTH, message = "Description cannot be empty"))]
    pub description: String,

    pub category: ProjectCategory,

    #[validate(custom(function = validate_technologies))]
    #[serde(default)]
    pub technologies: Vec<String>,

    #[validate(custom(function = validate_url))]
    pub image: Option<String>,

    #[validate(custom(function = validate_url))]
    #[serde(rename = "demoLink")]
    pub demo_link: Option<String>,

    #[validate(custom(function = validate_url))]
    #[serde(rename = "githubLink")]
    pub github_link: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"),
        custom(function = validate_title)
    )]
    pub title: Option<String>,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH, max = MAX_DESCRIPTION_LENGTH, message = "Description cannot be empty"))]
    pub description: Option<String>,

    pub category: Option<ProjectCategory>,

    #[validate(custom(function = validate_technologies))]
    pub technologies: Option<Vec<String>>,

    #[validate(custom(function = validate_url))]
    pub image: Option<String>,

    #[validate(custom(function = validate_url))]
    #[serde(rename = "demoLink")]
    pub demo_link: Option<String>,

    #[validate(custom(function = validate_url))]
    #[serde(rename = "githubLink")]
    pub github_link: Option<String>,

    pub featured: Option<bool>,
}

impl NewProjectRequest {
    /// Builds the stored record: fresh id, random display color, both
    /// timestamps set to now.
    pub fn prepare_for_insert(&self) -> Project {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            technologies: self.technologies.clone(),
            image: self.image.clone(),
            demo_link: self.demo_link.clone(),
            github_link: self.github_link.clone(),
            featured: self.featured,
            bg_color: random_bg_color(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateProjectRequest {
    /// Merge semantics: absent fields retain their prior value. This wire
    /// contract cannot express "set to null"; `updated_at` is refreshed on
    /// every successful merge.
    pub fn apply(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(technologies) = &self.technologies {
            project.technologies = technologies.clone();
        }
        if let Some(image) = &self.image {
            project.image = Some(image.clone());
        }
        if let Some(demo_link) = &self.demo_link {
            project.demo_link = Some(demo_link.clone());
        }
        if let Some(github_link) = &self.github_link {
            project.github_link = Some(github_link.clone());
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
        project.updated_at = Utc::now();
    }

    pub fn set_featured(featured: bool) -> Self {
        UpdateProjectRequest {
            featured: Some(featured),
            ..Default::default()
        }
    }
}

fn random_bg_color() -> String {
    let mut rng = rand::thread_rng();
    format!("#{:06x}", rng.gen_range(0..0x100_0000u32))
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.len() > MAX_TECHNOLOGIES as usize {
        return Err(new_validation_error("too_many_technologies", "Too many technology tags provided"));
    }
    for tag in technologies {
        if tag.is_empty() || tag.len() > MAX_TECHNOLOGY_LENGTH as usize {
            return Err(new_validation_error("invalid_technology_length", "Technology tag length must be within allowed range"));
        }
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(new_validation_error("title_blank", "Title cannot be blank"));
    }
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> NewProjectRequest {
        NewProjectRequest {
            title: "Inventory Dashboard".to_string(),
            description: "Stock tracking with live charts".to_string(),
            category: ProjectCategory::WebSystem,
            technologies: vec!["React".to_string(), "Node.js".to_string()],
            image: None,
            demo_link: None,
            github_link: None,
            featured: false,
        }
    }

    #[test]
    fn category_uses_kebab_case_wire_values() {
        let json = serde_json::to_string(&ProjectCategory::WebSystem).unwrap();
        assert_eq!(json, "\"web-system\"");
        let parsed: ProjectCategory = serde_json::from_str("\"android-app\"").unwrap();
        assert_eq!(parsed, ProjectCategory::AndroidApp);
    }

    #[test]
    fn unknown_category_fails_deserialization() {
        let result = serde_json::from_str::<ProjectCategory>("\"desktop-app\"");
        assert!(result.is_err());
    }

    #[test]
    fn prepare_for_insert_assigns_id_color_and_timestamps() {
        let project = valid_request().prepare_for_insert();
        assert_eq!(project.title, "Inventory Dashboard");
        assert_eq!(project.created_at, project.updated_at);
        assert!(project.bg_color.starts_with('#'));
        assert_eq!(project.bg_color.len(), 7);
        assert!(project.bg_color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut request = valid_request();
        request.title = "".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn bad_url_fails_validation() {
        let mut request = valid_request();
        request.image = Some("ftp://example.com/image.png".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn merge_update_keeps_absent_fields() {
        let mut project = valid_request().prepare_for_insert();
        let before = project.clone();

        let update = UpdateProjectRequest::set_featured(true);
        update.apply(&mut project);

        assert!(project.featured);
        assert_eq!(project.title, before.title);
        assert_eq!(project.description, before.description);
        assert_eq!(project.technologies, before.technologies);
        assert_eq!(project.bg_color, before.bg_color);
        assert_eq!(project.created_at, before.created_at);
        assert!(project.updated_at >= before.updated_at);
    }

    #[test]
    fn wire_names_use_camel_case_links() {
        let project = valid_request().prepare_for_insert();
        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("demoLink").is_some());
        assert!(value.get("githubLink").is_some());
        assert!(value.get("demo_link").is_none());
    }
}
