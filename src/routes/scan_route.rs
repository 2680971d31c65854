use actix_web::{get, web, HttpResponse};
use askama::Template;
use serde::{Deserialize, Serialize};

use crate::{
    configuration::Settings,
    domain::{
        record::{month_count, ClassifiedRecord},
        search_query::{InputError, SearchQuery},
    },
    services::GoogleScanner,
};

pub const DEFAULT_RESULT_COUNT: u8 = 5;

#[derive(Deserialize)]
pub struct ScanParams {
    keyword: String,
    num_results: Option<u8>,
}

impl ScanParams {
    pub fn to_query(&self, settings: &Settings) -> Result<SearchQuery, InputError> {
        SearchQuery::parse(
            &self.keyword,
            self.num_results.unwrap_or(DEFAULT_RESULT_COUNT),
            settings.search.max_results,
        )
    }
}

#[derive(Template)]
#[template(path = "scan.html")]
struct ScanTemplate<'a> {
    keyword: &'a str,
    result_count: u8,
    month_count: usize,
    records: &'a [ClassifiedRecord],
}

#[get("")]
pub async fn scan(
    scanner: web::Data<GoogleScanner>,
    settings: web::Data<Settings>,
    params: web::Query<ScanParams>,
) -> actix_web::Result<HttpResponse> {
    let query = params.to_query(&settings)?;
    let records = scanner.scan(&query).await?;

    let page = ScanTemplate {
        keyword: &query.keyword,
        result_count: query.result_count,
        month_count: month_count(&records),
        records: &records,
    };

    Ok(HttpResponse::Ok().body(page.render().unwrap()))
}

#[derive(Serialize)]
struct ScanResponse {
    keyword: String,
    month_count: usize,
    records: Vec<ClassifiedRecord>,
}

#[get("/records")]
pub async fn scan_records(
    scanner: web::Data<GoogleScanner>,
    settings: web::Data<Settings>,
    params: web::Query<ScanParams>,
) -> actix_web::Result<HttpResponse> {
    let query = params.to_query(&settings)?;
    let records = scanner.scan(&query).await?;

    Ok(HttpResponse::Ok().json(ScanResponse {
        keyword: query.keyword,
        month_count: month_count(&records),
        records,
    }))
}
