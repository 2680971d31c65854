use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::{configuration::SearchSettings, domain::search_query::SearchQuery};

/// Static browser identity sent with every request. Plain requests without it
/// get blocked far more often.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Raw results-page body, dropped as soon as extraction has run.
pub struct RawPage {
    pub body: String,
}

/// One opaque failure kind for the caller; the distinct underlying cause
/// (timeout, connect, bad status, body read) is logged before collapsing.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("The search request failed")]
pub struct FetchError;

impl ResponseError for FetchError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadGateway().body(self.to_string())
    }
}

pub trait PageFetcher {
    fn fetch(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<RawPage, FetchError>>;
}

#[derive(Serialize)]
struct SearchParams {
    q: String,
    num: u8,
}

/// Issues GETs against the results-page endpoint, one at a time. No retries,
/// no rate limiting; the only hardening over the original tool is a bounded
/// request timeout.
pub struct SearchFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchFetcher {
    pub fn new(settings: &SearchSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl PageFetcher for SearchFetcher {
    async fn fetch(&self, query: &SearchQuery) -> Result<RawPage, FetchError> {
        let params = SearchParams {
            q: query.keyword.clone(),
            num: query.result_count,
        };

        let response = match self.client.get(&self.endpoint).query(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    log::error!("Search request timed out on keyword {:?}: {:?}", query.keyword, e);
                } else if e.is_connect() {
                    log::error!(
                        "Failed to connect to search endpoint on keyword {:?}: {:?}",
                        query.keyword,
                        e
                    );
                } else {
                    log::error!("Search request failed on keyword {:?}: {:?}", query.keyword, e);
                }
                return Err(FetchError);
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::error!(
                "Search returned status {} on keyword {:?}",
                status,
                query.keyword
            );
            return Err(FetchError);
        }

        match response.text().await {
            Ok(body) => Ok(RawPage { body }),
            Err(e) => {
                log::error!(
                    "Failed to read results-page body on keyword {:?}: {:?}",
                    query.keyword,
                    e
                );
                Err(FetchError)
            }
        }
    }
}
