use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use scraper::{Html, Selector};

use crate::domain::record::ResultPair;

use super::fetcher::RawPage;

// Class combos that mark title and displayed-url text in result snippets.
// Reverse engineered, undocumented, and liable to break whenever the page
// layout changes; everything else talks to `ResultExtractor`, not to these.
const TITLE_SELECTOR: &str = ".BNeawe.vvjwJb.AP7Wnd";
const URL_SELECTOR: &str = ".BNeawe.UPmit.AP7Wnd";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExtractError {
    #[error("Invalid result selector: {0}")]
    BadSelector(String),

    #[error("No search results matched the page selectors")]
    NoResults,
}

impl ResponseError for ExtractError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExtractError::BadSelector(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ExtractError::NoResults => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

/// Seam between the pipeline and the page layout, so the selector strategy
/// can be swapped without touching fetch or classification.
pub trait ResultExtractor {
    fn extract(&self, page: &RawPage) -> Result<Vec<ResultPair>, ExtractError>;
}

pub struct SnippetExtractor {
    title_selector: Selector,
    url_selector: Selector,
}

impl SnippetExtractor {
    pub fn new(title_selector: &str, url_selector: &str) -> Result<Self, ExtractError> {
        let title = Selector::parse(title_selector)
            .map_err(|_| ExtractError::BadSelector(title_selector.to_string()))?;
        let url = Selector::parse(url_selector)
            .map_err(|_| ExtractError::BadSelector(url_selector.to_string()))?;

        Ok(Self {
            title_selector: title,
            url_selector: url,
        })
    }

    /// Extractor for Google's results-page snippet markup.
    pub fn google() -> Self {
        Self::new(TITLE_SELECTOR, URL_SELECTOR).expect("hardcoded selectors are valid CSS")
    }
}

impl ResultExtractor for SnippetExtractor {
    fn extract(&self, page: &RawPage) -> Result<Vec<ResultPair>, ExtractError> {
        let document = Html::parse_document(&page.body);

        let titles: Vec<String> = document
            .select(&self.title_selector)
            .map(|tag| tag.text().collect())
            .collect();
        let urls: Vec<String> = document
            .select(&self.url_selector)
            .map(|tag| tag.text().collect())
            .collect();

        if titles.is_empty() || urls.is_empty() {
            return Err(ExtractError::NoResults);
        }

        // zip truncates to the shorter list, so a lone unmatched title never
        // pairs with a url from a different snippet.
        let pairs = titles
            .into_iter()
            .zip(urls)
            .map(|(title, displayed_url)| ResultPair {
                title,
                displayed_url,
            })
            .collect();

        Ok(pairs)
    }
}
