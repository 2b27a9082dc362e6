//! Help-centre FAQ: category tabs, search, grouping and match highlighting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("invalid FAQ JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate FAQ id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Faq {
    pub id: u32,
    /// Category slug, e.g. `payments`.
    pub category: String,
    pub question: String,
    /// Answer markup as authored; may contain inline HTML.
    pub answer: String,
    pub tags: Vec<String>,
}

impl Faq {
    /// Case-insensitive search over question, answer and tags. `needle` must
    /// already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
            || self.answer.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Active FAQ filters. `None` / empty fields do not filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqFilter {
    pub search: String,
    pub category: Option<String>,
}

impl FaqFilter {
    pub fn apply<'a>(&self, faqs: &'a [Faq]) -> Vec<&'a Faq> {
        let needle = self.search.trim().to_lowercase();
        let out: Vec<&Faq> = faqs
            .iter()
            .filter(|f| self.category.as_ref().is_none_or(|cat| &f.category == cat))
            .filter(|f| needle.is_empty() || f.matches(&needle))
            .collect();
        tracing::trace!(matched = out.len(), total = faqs.len(), "faqs filtered");
        out
    }

    /// `text` with every match of the search term wrapped in `<mark>`.
    pub fn highlight(&self, text: &str) -> String {
        highlight(text, self.search.trim())
    }
}

/// Parse a JSON array of FAQ entries. Ids must be unique.
pub fn load_faqs(data: &str) -> Result<Vec<Faq>, FaqError> {
    let faqs: Vec<Faq> = serde_json::from_str(data)?;
    let mut seen = std::collections::HashSet::with_capacity(faqs.len());
    for faq in &faqs {
        if !seen.insert(faq.id) {
            return Err(FaqError::DuplicateId(faq.id));
        }
    }
    tracing::debug!(faqs = faqs.len(), "faqs loaded");
    Ok(faqs)
}

/// Section heading for a category slug. Unknown slugs are shown as-is.
pub fn category_label(slug: &str) -> &str {
    match slug {
        "courses" => "Course Related Questions",
        "payments" => "Payment & Refund Questions",
        "technical" => "Technical Support",
        "certificates" => "Certificates & Completion",
        "account" => "Account Management",
        other => other,
    }
}

/// Group entries by category. Groups and their entries keep first-seen
/// order.
pub fn group_by_category<'a>(faqs: &[&'a Faq]) -> Vec<(&'a str, Vec<&'a Faq>)> {
    let mut groups: Vec<(&'a str, Vec<&'a Faq>)> = Vec::new();
    for &faq in faqs {
        match groups.iter_mut().find(|(cat, _)| *cat == faq.category.as_str()) {
            Some((_, entries)) => entries.push(faq),
            None => groups.push((faq.category.as_str(), vec![faq])),
        }
    }
    groups
}

/// The first `limit` entries, which the help centre lists as popular.
pub fn popular(faqs: &[Faq], limit: usize) -> &[Faq] {
    &faqs[..limit.min(faqs.len())]
}

pub fn find(faqs: &[Faq], id: u32) -> Option<&Faq> {
    faqs.iter().find(|f| f.id == id)
}

/// Append `faq` with the next free id and return that id.
pub fn add(faqs: &mut Vec<Faq>, mut faq: Faq) -> u32 {
    faq.id = faqs.iter().map(|f| f.id).max().map_or(1, |max| max + 1);
    let id = faq.id;
    faqs.push(faq);
    id
}

/// Wrap every case-insensitive occurrence of `term` in `<mark>`, keeping the
/// original casing of the matched text. An empty term leaves `text` alone.
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < chars.len() {
        let Some(len) = match_len(&chars[i..], &needle) else {
            i += 1;
            continue;
        };
        let start = chars[i].0;
        let end = chars.get(i + len).map_or(text.len(), |&(at, _)| at);
        out.push_str(&text[copied..start]);
        out.push_str("<mark>");
        out.push_str(&text[start..end]);
        out.push_str("</mark>");
        copied = end;
        i += len;
    }
    out.push_str(&text[copied..]);
    out
}

/// Number of chars of `haystack` that lower-case to exactly `needle`.
fn match_len(haystack: &[(usize, char)], needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (used, &(_, c)) in haystack.iter().enumerate() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(used + 1);
        }
    }
    None
}
