use serde::{Deserialize, Serialize};
use serde_json::Number;
use time::OffsetDateTime;

use super::validator::BookDraft;

/// A book stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier assigned at creation
    pub id: String,
    pub name: String,
    /// Any JSON number, echoed back exactly as it was sent
    pub year: Option<Number>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Derived: `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Book {
    /// Materialize a validated draft into a stored record.
    pub fn from_draft(
        id: String,
        draft: BookDraft,
        inserted_at: OffsetDateTime,
        updated_at: OffsetDateTime,
    ) -> Self {
        let finished = draft.is_finished();
        Self {
            id,
            name: draft.name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            finished,
            reading: draft.reading,
            inserted_at,
            updated_at,
        }
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Request body for creating or replacing a book.
///
/// Every field is optional at the boundary; the validator decides what is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<Number>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

/// Projection returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreated {
    pub book_id: String,
}

#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub book: Book,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn payload_uses_camel_case_and_defaults() {
        let payload: BookPayload = serde_json::from_value(json!({
            "name": "Dumbo",
            "pageCount": 100,
            "readPage": 25
        }))
        .unwrap();

        assert_eq!(payload.name.as_deref(), Some("Dumbo"));
        assert_eq!(payload.page_count, 100);
        assert_eq!(payload.read_page, 25);
        assert!(!payload.reading);
        assert!(payload.publisher.is_none());
    }

    #[test]
    fn fractional_year_is_accepted() {
        let payload: BookPayload =
            serde_json::from_value(json!({"name": "X", "year": 1999.5})).unwrap();
        assert_eq!(payload.year.and_then(|year| year.as_f64()), Some(1999.5));
    }

    #[test]
    fn textual_year_is_not_a_payload() {
        let result: Result<BookPayload, _> =
            serde_json::from_value(json!({"name": "X", "year": "2010"}));
        assert!(result.is_err());
    }

    #[test]
    fn negative_page_count_is_not_a_payload() {
        let result: Result<BookPayload, _> =
            serde_json::from_value(json!({"name": "X", "pageCount": -1}));
        assert!(result.is_err());
    }

    #[test]
    fn book_serializes_wire_field_names() {
        let at = datetime!(2024-05-01 10:00:00 UTC);
        let book = Book {
            id: "abc".into(),
            name: "Dumbo".into(),
            year: Some(Number::from(1941)),
            author: None,
            summary: None,
            publisher: Some("Disney".into()),
            page_count: 10,
            read_page: 10,
            finished: true,
            reading: false,
            inserted_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["pageCount"], 10);
        assert_eq!(value["readPage"], 10);
        assert_eq!(value["year"], 1941);
        assert_eq!(value["insertedAt"], "2024-05-01T10:00:00Z");
        assert_eq!(value["author"], serde_json::Value::Null);

        assert_eq!(
            serde_json::to_value(book.summary()).unwrap(),
            json!({"id": "abc", "name": "Dumbo", "publisher": "Disney"})
        );
    }
}
