use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// What the end user asked us to scan. Validated on construction and not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub result_count: u8,
}

impl SearchQuery {
    pub fn parse(keyword: &str, result_count: u8, max_results: u8) -> Result<Self, InputError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(InputError::EmptyKeyword);
        }
        if result_count < 1 || result_count > max_results {
            return Err(InputError::ResultCountOutOfRange {
                got: result_count,
                max: max_results,
            });
        }

        Ok(Self {
            keyword: keyword.to_string(),
            result_count,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Please enter a keyword to search")]
    EmptyKeyword,

    #[error("Result count must be between 1 and {max}, got {got}")]
    ResultCountOutOfRange { got: u8, max: u8 },

    #[error("Could not read the uploaded keyword list: {0}")]
    UnreadableKeywordList(String),

    #[error("The uploaded keyword list contains no keywords")]
    EmptyKeywordList,
}

impl ResponseError for InputError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().body(self.to_string())
    }
}
