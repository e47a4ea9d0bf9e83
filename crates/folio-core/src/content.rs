use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel category that selects every project.
pub const ALL_CATEGORY: &str = "All";

/// A single portfolio project entry.
///
/// Records are read-only once loaded; the filter engine clones what it
/// returns and never touches the source collection. `year` stays a string
/// (the wire format carries it that way); sorting parses it leniently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    pub featured: bool,
    pub year: String,
}

/// A category label paired with how many projects carry it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub count: usize,
}

/// A skill with a 0–100 proficiency level, grouped for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

/// An offered service with its feature bullet points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

/// A client testimonial with a 1–5 star rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub avatar: String,
    pub rating: u8,
}

/// One education entry, newest first in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

/// Identity block for the site owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub resume_url: String,
    pub social: SocialLinks,
}

/// The full static content catalog backing the site.
///
/// `categories` is the filter vocabulary: `"All"` first, then one entry per
/// real project category. [`PortfolioContent::validate`] enforces the
/// invariants the host relies on when rendering blindly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub personal: Personal,
    pub bio: String,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub projects: Vec<ProjectRecord>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub categories: Vec<String>,
}

/// Catalog integrity violation found by [`PortfolioContent::validate`].
#[derive(Debug, PartialEq, Eq)]
pub enum ContentError {
    DuplicateId { kind: &'static str, id: u32 },
    MissingAllCategory,
    MisplacedAllCategory,
    UnknownCategory { project: u32, category: String },
    RatingOutOfRange { testimonial: u32, rating: u8 },
    LevelOutOfRange { skill: String, level: u8 },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id: {id}")
            }
            ContentError::MissingAllCategory => {
                write!(f, "category list must start with \"{ALL_CATEGORY}\"")
            }
            ContentError::MisplacedAllCategory => {
                write!(f, "\"{ALL_CATEGORY}\" may only appear first in the category list")
            }
            ContentError::UnknownCategory { project, category } => {
                write!(f, "project {project} uses unlisted category \"{category}\"")
            }
            ContentError::RatingOutOfRange { testimonial, rating } => {
                write!(f, "testimonial {testimonial} rating {rating} outside 1..=5")
            }
            ContentError::LevelOutOfRange { skill, level } => {
                write!(f, "skill \"{skill}\" level {level} outside 0..=100")
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Catalog counts for the `stats` surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentStats {
    pub projects: usize,
    pub featured: usize,
    pub categories: usize,
    pub skills: usize,
    pub services: usize,
    pub testimonials: usize,
}

impl PortfolioContent {
    /// Check every invariant the rendering host assumes.
    ///
    /// Returns the first violation found; a loaded catalog that passes here
    /// can be filtered and displayed without further defensive checks.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_unique_ids("project", self.projects.iter().map(|p| p.id))?;
        check_unique_ids("service", self.services.iter().map(|s| s.id))?;
        check_unique_ids("testimonial", self.testimonials.iter().map(|t| t.id))?;

        match self.categories.first() {
            Some(first) if first == ALL_CATEGORY => {}
            _ => return Err(ContentError::MissingAllCategory),
        }
        if self.categories[1..].iter().any(|c| c == ALL_CATEGORY) {
            return Err(ContentError::MisplacedAllCategory);
        }

        for project in &self.projects {
            if !self.categories[1..].contains(&project.category) {
                return Err(ContentError::UnknownCategory {
                    project: project.id,
                    category: project.category.clone(),
                });
            }
        }

        for t in &self.testimonials {
            if !(1..=5).contains(&t.rating) {
                return Err(ContentError::RatingOutOfRange {
                    testimonial: t.id,
                    rating: t.rating,
                });
            }
        }
        for s in &self.skills {
            if s.level > 100 {
                return Err(ContentError::LevelOutOfRange {
                    skill: s.name.clone(),
                    level: s.level,
                });
            }
        }

        Ok(())
    }

    pub fn stats(&self) -> ContentStats {
        ContentStats {
            projects: self.projects.len(),
            featured: self.projects.iter().filter(|p| p.featured).count(),
            categories: self.categories.len().saturating_sub(1),
            skills: self.skills.len(),
            services: self.services.len(),
            testimonials: self.testimonials.len(),
        }
    }
}

fn check_unique_ids(
    kind: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { kind, id });
        }
    }
    Ok(())
}
