// src/cache/matcher.rs
// Boundary-aware keyword matching over a table of response patterns.
//
// A keyword only counts when it appears as a whole word (or whole phrase)
// in the lowercased input: "hi" matches "hi there" but not "historical".
// Keywords that start or end with punctuation (e.g. "c++") are only
// anchored on the sides that are word characters.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern has no keywords")]
    NoKeywords,

    #[error("pattern has no responses")]
    NoResponses,

    #[error("invalid keyword expression: {0}")]
    InvalidKeyword(#[from] regex::Error),
}

/// Keywords, candidate replies and a priority. Immutable once built.
#[derive(Debug, Clone)]
pub struct ResponsePattern {
    keywords: Vec<String>,
    responses: Vec<String>,
    priority: i32,
    matcher: Regex,
}

impl ResponsePattern {
    pub fn new<K, R>(keywords: K, responses: R, priority: i32) -> Result<Self, PatternError>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(PatternError::NoKeywords);
        }

        let responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        if responses.is_empty() {
            return Err(PatternError::NoResponses);
        }

        let expression = keywords
            .iter()
            .map(|k| format!("(?:{})", bounded(k)))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            matcher: Regex::new(&expression)?,
            keywords,
            responses,
            priority,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Never empty
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// `normalized` must already be lowercase.
    fn matches(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn bounded(keyword: &str) -> String {
    let mut expr = String::with_capacity(keyword.len() + 4);
    if keyword.starts_with(is_word_char) {
        expr.push_str(r"\b");
    }
    expr.push_str(&regex::escape(keyword));
    if keyword.ends_with(is_word_char) {
        expr.push_str(r"\b");
    }
    expr
}

/// Highest-priority pattern with at least one keyword in `input`.
///
/// Ties go to the pattern declared first. `None` is the normal
/// "no opinion" answer, not an error.
pub fn best_match<'a>(input: &str, table: &'a [ResponsePattern]) -> Option<&'a ResponsePattern> {
    let normalized = input.to_lowercase();
    let mut best: Option<&ResponsePattern> = None;

    for pattern in table.iter().filter(|p| p.matches(&normalized)) {
        match best {
            Some(current) if current.priority >= pattern.priority => {}
            _ => best = Some(pattern),
        }
    }

    best
}
