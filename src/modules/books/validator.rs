use serde_json::Number;

use super::error::BookError;
use super::models::BookPayload;

/// Book fields that passed validation and are ready to be stored.
///
/// Values are kept exactly as supplied; nothing is trimmed or coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub name: String,
    pub year: Option<Number>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookDraft {
    /// Whether every page has been read. A draft never has `read_page > page_count`.
    pub fn is_finished(&self) -> bool {
        self.read_page == self.page_count
    }
}

impl TryFrom<BookPayload> for BookDraft {
    type Error = BookError;

    /// Checks the name first, then the page counts.
    fn try_from(payload: BookPayload) -> Result<Self, Self::Error> {
        let name = match payload.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BookError::InvalidName),
        };

        if payload.read_page > payload.page_count {
            return Err(BookError::PageOverflow {
                read_page: payload.read_page,
                page_count: payload.page_count,
            });
        }

        Ok(Self {
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            reading: payload.reading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, page_count: u32, read_page: u32) -> BookPayload {
        BookPayload {
            name: name.map(str::to_string),
            page_count,
            read_page,
            ..Default::default()
        }
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = BookDraft::try_from(payload(None, 10, 1)).unwrap_err();
        assert!(matches!(err, BookError::InvalidName));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = BookDraft::try_from(payload(Some(""), 10, 1)).unwrap_err();
        assert!(matches!(err, BookError::InvalidName));
    }

    #[test]
    fn name_is_checked_before_pages() {
        let err = BookDraft::try_from(payload(Some(""), 10, 50)).unwrap_err();
        assert!(matches!(err, BookError::InvalidName));
    }

    #[test]
    fn read_page_beyond_page_count_is_rejected() {
        let err = BookDraft::try_from(payload(Some("X"), 50, 60)).unwrap_err();
        assert!(matches!(
            err,
            BookError::PageOverflow {
                read_page: 60,
                page_count: 50
            }
        ));
    }

    #[test]
    fn fields_are_kept_verbatim() {
        let draft = BookDraft::try_from(BookPayload {
            name: Some("  Dumbo ".into()),
            year: Some(Number::from(1941)),
            author: Some("Helen Aberson".into()),
            summary: Some("".into()),
            publisher: Some("Roll-a-Book".into()),
            page_count: 100,
            read_page: 40,
            reading: true,
        })
        .unwrap();

        assert_eq!(draft.name, "  Dumbo ");
        assert_eq!(draft.summary.as_deref(), Some(""));
        assert_eq!(draft.year, Some(Number::from(1941)));
        assert!(draft.reading);
        assert!(!draft.is_finished());
    }

    #[test]
    fn finished_when_every_page_is_read() {
        let draft = BookDraft::try_from(payload(Some("Dumbo"), 100, 100)).unwrap();
        assert!(draft.is_finished());

        let empty = BookDraft::try_from(payload(Some("Pamphlet"), 0, 0)).unwrap();
        assert!(empty.is_finished());
    }
}
