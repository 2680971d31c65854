use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::domain::{
    record::{assemble_records, ClassifiedRecord, ResultSet},
    search_query::SearchQuery,
};

use super::{
    extractor::{ExtractError, ResultExtractor, SnippetExtractor},
    fetcher::{FetchError, PageFetcher, SearchFetcher},
};

/// Per-keyword failure: either leg of fetch -> extract short-circuits the
/// keyword it belongs to.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScanError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl ResponseError for ScanError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScanError::Fetch(e) => e.status_code(),
            ScanError::Extract(e) => e.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ScanError::Fetch(e) => e.error_response(),
            ScanError::Extract(e) => e.error_response(),
        }
    }
}

/// Outcome of a bulk run. Keywords that failed contribute zero records but
/// are counted instead of vanishing silently.
#[derive(Debug, Default)]
pub struct BulkReport {
    pub results: ResultSet,
    pub failed_keywords: Vec<String>,
}

/// The whole pipeline for one keyword: fetch the results page, extract
/// title/url pairs, classify and rank them.
pub struct Scanner<F = SearchFetcher, E = SnippetExtractor> {
    fetcher: F,
    extractor: E,
}

pub type GoogleScanner = Scanner<SearchFetcher, SnippetExtractor>;

impl<F: PageFetcher, E: ResultExtractor> Scanner<F, E> {
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn scan(&self, query: &SearchQuery) -> Result<Vec<ClassifiedRecord>, ScanError> {
        let page = self.fetcher.fetch(query).await?;
        let pairs = self.extractor.extract(&page)?;

        log::info!(
            "Extracted {} result pairs for keyword {:?}",
            pairs.len(),
            query.keyword
        );

        Ok(assemble_records(&query.keyword, pairs))
    }

    /// Runs every query strictly in sequence. A failing keyword is logged and
    /// skipped; it never aborts the keywords after it.
    pub async fn scan_bulk(&self, queries: &[SearchQuery]) -> BulkReport {
        let mut report = BulkReport::default();

        for query in queries {
            match self.scan(query).await {
                Ok(records) => report.results.extend(records),
                Err(e) => {
                    log::error!("Skipping keyword {:?}: {}", query.keyword, e);
                    report.failed_keywords.push(query.keyword.clone());
                }
            }
        }

        log::info!(
            "Bulk scan finished: {} records, {} of {} keywords failed",
            report.results.len(),
            report.failed_keywords.len(),
            queries.len()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        domain::search_query::SearchQuery,
        services::{
            extractor::SnippetExtractor,
            fetcher::{FetchError, PageFetcher, RawPage},
        },
    };

    use super::{ScanError, Scanner};

    /// Serves canned page bodies by keyword; unknown keywords fail the way a
    /// dead network would.
    struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    impl StaticFetcher {
        fn new(pages: &[(&str, String)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(keyword, body)| (keyword.to_string(), body.clone()))
                    .collect(),
            }
        }
    }

    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, query: &SearchQuery) -> Result<RawPage, FetchError> {
            match self.pages.get(&query.keyword) {
                Some(body) => Ok(RawPage { body: body.clone() }),
                None => Err(FetchError),
            }
        }
    }

    fn snippet_page(results: &[(&str, &str)]) -> String {
        let mut body = String::from("<html><body>");
        for (title, _) in results {
            body.push_str(&format!(
                r#"<div class="BNeawe vvjwJb AP7Wnd">{}</div>"#,
                title
            ));
        }
        for (_, url) in results {
            body.push_str(&format!(r#"<div class="BNeawe UPmit AP7Wnd">{}</div>"#, url));
        }
        body.push_str("</body></html>");
        body
    }

    fn query(keyword: &str) -> SearchQuery {
        SearchQuery::parse(keyword, 10, 10).unwrap()
    }

    #[tokio::test]
    async fn scan_classifies_and_ranks_extracted_results() {
        let fetcher = StaticFetcher::new(&[(
            "best credit cards",
            snippet_page(&[
                ("Best Credit Cards for Travel in October 2024", "site1.com"),
                ("Top Rewards Cards", "site2.com"),
            ]),
        )]);
        let scanner = Scanner::new(fetcher, SnippetExtractor::google());

        let records = scanner.scan(&query("best credit cards")).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[0].url, "site1.com");
        assert!(records[0].contains_month);
        assert_eq!(records[1].rank, 2);
        assert!(!records[1].contains_month);
        assert_eq!(
            records.iter().filter(|r| r.contains_month).count(),
            1,
            "summary count should flag exactly one title"
        );
    }

    #[tokio::test]
    async fn scan_surfaces_fetch_failure() {
        let fetcher = StaticFetcher::new(&[]);
        let scanner = Scanner::new(fetcher, SnippetExtractor::google());

        let result = scanner.scan(&query("unknown")).await;

        assert!(matches!(result, Err(ScanError::Fetch(_))));
    }

    #[tokio::test]
    async fn scan_surfaces_empty_extraction() {
        let fetcher = StaticFetcher::new(&[("sparse", "<html><body></body></html>".to_string())]);
        let scanner = Scanner::new(fetcher, SnippetExtractor::google());

        let result = scanner.scan(&query("sparse")).await;

        assert!(matches!(result, Err(ScanError::Extract(_))));
    }

    #[tokio::test]
    async fn bulk_scan_skips_failing_keywords_and_keeps_the_rest() {
        let fetcher = StaticFetcher::new(&[
            (
                "a",
                snippet_page(&[("a one", "a1.com"), ("a two", "a2.com"), ("a three", "a3.com")]),
            ),
            ("b", snippet_page(&[("b one", "b1.com"), ("b two", "b2.com")])),
        ]);
        let scanner = Scanner::new(fetcher, SnippetExtractor::google());

        let queries = vec![query("a"), query("broken"), query("b")];
        let report = scanner.scan_bulk(&queries).await;

        assert_eq!(report.failed_keywords, vec!["broken".to_string()]);
        assert_eq!(report.results.len(), 5);

        let ranks: Vec<usize> = report.results.records().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 1, 2]);
    }
}
