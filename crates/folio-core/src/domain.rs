use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub leetcode: String,
    pub geeksforgeeks: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub about: String,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub live: Option<String>,
}

/// A showcased project. Title and subtitle are always present; both links
/// may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub description: Vec<String>,
    pub tech: Vec<String>,
    pub links: ProjectLinks,
}

impl Project {
    /// The live-demo address normalized to an absolute URL, if the project
    /// has one.
    pub fn live_preview_url(&self) -> Option<String> {
        self.links
            .live
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(normalize_live_url)
    }
}

/// Prepends the default scheme when the stored address lacks one.
pub fn normalize_live_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub date: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub date: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub event: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// One key of the capabilities grid; `level` is a 0-100 proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillKey {
    pub name: String,
    pub level: u8,
}

impl SkillKey {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_owned(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantPersona {
    pub name: String,
    pub greeting: String,
    pub tagline: String,
}

/// Address-only references to the static assets the views display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub avatar: String,
    pub gallery: Vec<String>,
    pub resume_pdf: String,
    pub placeholder: String,
}

/// Substitutes the placeholder reference for every gallery slide the probe
/// reports as unavailable.
pub fn resolve_gallery_slides(
    catalog: &AssetCatalog,
    mut available: impl FnMut(&str) -> bool,
) -> Vec<String> {
    catalog
        .gallery
        .iter()
        .map(|slide| {
            if available(slide.as_str()) {
                slide.clone()
            } else {
                catalog.placeholder.clone()
            }
        })
        .collect()
}

/// The read-only domain data every view consumes. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub skill_rows: Vec<Vec<SkillKey>>,
    pub achievements: Vec<Achievement>,
    pub assistant: AssistantPersona,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_live(live: Option<&str>) -> Project {
        Project {
            title: "Sample".to_owned(),
            subtitle: "A sample project".to_owned(),
            date: "Jan 2025".to_owned(),
            description: Vec::new(),
            tech: Vec::new(),
            links: ProjectLinks {
                github: None,
                live: live.map(str::to_owned),
            },
        }
    }

    #[test]
    fn live_preview_url_prepends_default_scheme() {
        let project = project_with_live(Some("example.com"));
        assert_eq!(
            project.live_preview_url().as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn live_preview_url_keeps_existing_scheme() {
        let secure = project_with_live(Some("https://demo.example.com"));
        assert_eq!(
            secure.live_preview_url().as_deref(),
            Some("https://demo.example.com")
        );

        let plain = project_with_live(Some("http://demo.example.com"));
        assert_eq!(
            plain.live_preview_url().as_deref(),
            Some("http://demo.example.com")
        );
    }

    #[test]
    fn live_preview_url_is_absent_without_a_live_link() {
        assert_eq!(project_with_live(None).live_preview_url(), None);
        assert_eq!(project_with_live(Some("   ")).live_preview_url(), None);
    }

    #[test]
    fn missing_gallery_slides_fall_back_to_the_placeholder() {
        let catalog = AssetCatalog {
            avatar: "avatar.png".to_owned(),
            gallery: vec![
                "one.png".to_owned(),
                "two.png".to_owned(),
                "three.png".to_owned(),
            ],
            resume_pdf: "resume.pdf".to_owned(),
            placeholder: "placeholder.png".to_owned(),
        };

        let resolved = resolve_gallery_slides(&catalog, |slide| slide != "two.png");
        assert_eq!(
            resolved,
            vec![
                "one.png".to_owned(),
                "placeholder.png".to_owned(),
                "three.png".to_owned(),
            ]
        );
    }
}
