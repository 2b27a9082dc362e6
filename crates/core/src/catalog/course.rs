use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// One entry of the course catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    /// Category slug, e.g. `web-dev`.
    pub category: String,
    pub level: Level,
    /// Total content length in hours.
    pub duration: u32,
    pub price: u32,
    pub original_price: u32,
    pub rating: f32,
    pub students: u32,
    pub description: String,
    pub tags: Vec<String>,
    /// Optional ribbon text ("Bestseller", "New"); empty for none.
    pub badge: String,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub last_updated: String,
}

impl Course {
    /// Case-insensitive search over title, instructor, description and tags.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.instructor.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Rounded discount against the original price, in percent.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price == 0 || self.price >= self.original_price {
            return 0;
        }
        let ratio = 1.0 - f64::from(self.price) / f64::from(self.original_price);
        (ratio * 100.0).round() as u32
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Star breakdown for a rating out of five: (full, half, empty).
pub fn star_rating(rating: f32) -> (u8, u8, u8) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as u8;
    let half = u8::from(rating.fract() > 0.0);
    (full, half, 5 - full - half)
}
