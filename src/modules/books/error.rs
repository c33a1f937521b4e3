use bookshelf_http::AppError;
use thiserror::Error;

/// Failures raised by the book validator and the catalog store.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("book name is missing or empty")]
    InvalidName,

    #[error("readPage ({read_page}) is greater than pageCount ({page_count})")]
    PageOverflow { read_page: u32, page_count: u32 },

    #[error("no book with id '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Catalog operation a [`BookError`] occurred in; selects the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Get,
    Update,
    Delete,
}

impl BookError {
    pub fn into_app_error(self, operation: Operation) -> AppError {
        use Operation::*;

        match (self, operation) {
            (BookError::InvalidName, Add) => {
                AppError::bad_request("Failed to add book. Please provide the book name")
            }
            (BookError::InvalidName, Update) => {
                AppError::bad_request("Failed to update book. Please provide the book name")
            }
            (BookError::PageOverflow { .. }, Add) => AppError::bad_request(
                "Failed to add book. readPage cannot be greater than pageCount",
            ),
            (BookError::PageOverflow { .. }, Update) => AppError::bad_request(
                "Failed to update book. readPage cannot be greater than pageCount",
            ),
            (BookError::NotFound(_), Get) => AppError::not_found("Book not found"),
            (BookError::NotFound(_), Update) => {
                AppError::not_found("Failed to update book. Id not found")
            }
            (BookError::NotFound(_), Delete) => {
                AppError::not_found("Failed to delete book. Id not found")
            }
            (other, operation) => AppError::internal(failure_message(operation), other),
        }
    }
}

fn failure_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "Failed to add book",
        Operation::Get => "Failed to get book",
        Operation::Update => "Failed to update book",
        Operation::Delete => "Failed to delete book",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = BookError::InvalidName.into_app_error(Operation::Add);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = BookError::PageOverflow {
            read_page: 2,
            page_count: 1,
        }
        .into_app_error(Operation::Update);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Failed to update book. readPage"));
    }

    #[test]
    fn not_found_is_distinct_from_validation() {
        let err = BookError::NotFound("x".into()).into_app_error(Operation::Update);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("Id not found"));
    }

    #[test]
    fn unexpected_errors_are_server_errors() {
        let err = BookError::Unexpected(anyhow::anyhow!("boom")).into_app_error(Operation::Add);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("internal error: Failed to add book"));
    }
}
