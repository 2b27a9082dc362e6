//! In-memory course catalog: filtering, sorting and pagination.

pub mod course;
pub mod filter;
pub mod pagination;

use thiserror::Error;

pub use course::{Course, Level};
pub use filter::{CourseFilter, DurationBucket, PriceBucket, SortOrder};
pub use pagination::{PageItem, Pagination};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate course id {0}")]
    DuplicateId(u32),
}

/// Parse a JSON array of courses. Ids must be unique.
pub fn load_courses(data: &str) -> Result<Vec<Course>, CatalogError> {
    let courses: Vec<Course> = serde_json::from_str(data)?;
    let mut seen = std::collections::HashSet::with_capacity(courses.len());
    for course in &courses {
        if !seen.insert(course.id) {
            return Err(CatalogError::DuplicateId(course.id));
        }
    }
    tracing::debug!(courses = courses.len(), "catalog loaded");
    Ok(courses)
}

/// Display name for a category slug. Unknown slugs are shown as-is.
pub fn category_label(slug: &str) -> &str {
    match slug {
        "web-dev" => "Web Development",
        "mobile" => "Mobile Development",
        "ai-ml" => "AI & Machine Learning",
        "data-science" => "Data Science",
        "design" => "Design",
        "business" => "Business",
        other => other,
    }
}

/// Distinct categories in first-seen order, for building a filter menu.
pub fn categories(courses: &[Course]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for course in courses {
        if !out.contains(&course.category.as_str()) {
            out.push(&course.category);
        }
    }
    out
}
