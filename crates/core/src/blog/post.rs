use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    /// Job title shown under the byline.
    pub title: String,
}

/// One blog article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: Author,
    /// Category slug, e.g. `tutorials`.
    pub category: String,
    pub image: String,
    /// ISO-8601 publication date (`YYYY-MM-DD`).
    pub date: String,
    /// Estimated reading time in minutes.
    pub read_minutes: u32,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl Post {
    /// Case-insensitive search over title, excerpt, author name and tags.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.author.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn shares_tag_with(&self, other: &Post) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    /// "January 15, 2024". Dates that are not `YYYY-MM-DD` are returned as-is.
    pub fn display_date(&self) -> String {
        let mut parts = self.date.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return self.date.clone();
        };
        let month = month
            .parse::<usize>()
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|m| MONTHS.get(m));
        match (month, day.parse::<u32>()) {
            (Some(month), Ok(day)) => format!("{month} {day}, {year}"),
            _ => self.date.clone(),
        }
    }

    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}
