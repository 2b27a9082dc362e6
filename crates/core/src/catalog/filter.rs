use serde::{Deserialize, Serialize};

use super::course::{Course, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationBucket {
    /// Under 10 hours.
    Short,
    /// 10 to 30 hours inclusive.
    Medium,
    /// Over 30 hours.
    Long,
}

impl DurationBucket {
    pub fn contains(self, hours: u32) -> bool {
        match self {
            DurationBucket::Short => hours < 10,
            DurationBucket::Medium => (10..=30).contains(&hours),
            DurationBucket::Long => hours > 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceBucket {
    Free,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most students first.
    #[default]
    Popularity,
    Rating,
    /// Most recently updated first.
    Newest,
    PriceLow,
    PriceHigh,
}

/// Active catalog filters. `None` / empty fields do not filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseFilter {
    pub search: String,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub duration: Option<DurationBucket>,
    pub price: Option<PriceBucket>,
    pub sort: SortOrder,
}

impl CourseFilter {
    /// Filter and sort `courses`. The sort is stable, so ties keep catalog
    /// order.
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<&Course> = courses
            .iter()
            .filter(|c| needle.is_empty() || c.matches(&needle))
            .filter(|c| self.category.as_ref().is_none_or(|cat| &c.category == cat))
            .filter(|c| self.level.is_none_or(|level| c.level == level))
            .filter(|c| self.duration.is_none_or(|bucket| bucket.contains(c.duration)))
            .filter(|c| match self.price {
                None => true,
                Some(PriceBucket::Free) => c.is_free(),
                Some(PriceBucket::Paid) => !c.is_free(),
            })
            .collect();
        sort_courses(&mut out, self.sort);
        tracing::trace!(matched = out.len(), total = courses.len(), "catalog filtered");
        out
    }
}

pub fn sort_courses(courses: &mut [&Course], order: SortOrder) {
    match order {
        SortOrder::Popularity => courses.sort_by(|a, b| b.students.cmp(&a.students)),
        SortOrder::Rating => courses.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Newest => courses.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
        SortOrder::PriceLow => courses.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHigh => courses.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}
