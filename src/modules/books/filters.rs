//! Query filters for the list endpoint.

use super::models::Book;

/// Raw query string of `GET /books`.
///
/// Built from the decoded key/value pairs so that no query string can fail
/// the listing: the first value of a repeated key wins and unknown keys are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub reading: Option<String>,
    pub finished: Option<String>,
    pub name: Option<String>,
}

impl FromIterator<(String, String)> for ListQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                "name" => &mut query.name,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Parsed list filters; `None` lets every record through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub reading: Option<bool>,
    pub finished: Option<bool>,
    /// Lowercased name fragment
    name: Option<String>,
}

impl BookFilter {
    pub fn new(reading: Option<bool>, finished: Option<bool>, name: Option<&str>) -> Self {
        Self {
            reading,
            finished,
            name: name
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_lowercase),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Every present constraint must hold.
    pub fn matches(&self, book: &Book) -> bool {
        matches_reading(book, self.reading)
            && matches_finished(book, self.finished)
            && matches_name(book, self.name.as_deref())
    }
}

impl From<&ListQuery> for BookFilter {
    fn from(query: &ListQuery) -> Self {
        Self::new(
            query.reading.as_deref().and_then(parse_flag),
            query.finished.as_deref().and_then(parse_flag),
            query.name.as_deref(),
        )
    }
}

/// Parses a `reading`/`finished` query value.
///
/// Only the two values the API documents are recognised: `"1"` filters for
/// true and `"0"` for false. Every other value, the empty string included,
/// yields `None` and the filter is skipped, so `?reading=yes` lists the whole
/// catalog rather than the books not being read.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

pub fn matches_reading(book: &Book, reading: Option<bool>) -> bool {
    reading.is_none_or(|reading| book.reading == reading)
}

pub fn matches_finished(book: &Book, finished: Option<bool>) -> bool {
    finished.is_none_or(|finished| book.finished == finished)
}

/// Case-insensitive substring match; `fragment` must already be lowercase.
pub fn matches_name(book: &Book, fragment: Option<&str>) -> bool {
    fragment.is_none_or(|fragment| book.name.to_lowercase().contains(fragment))
}
