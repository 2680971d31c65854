use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{error::ErrorInternalServerError, post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    configuration::Settings,
    domain::search_query::SearchQuery,
    routes::scan_route::DEFAULT_RESULT_COUNT,
    services::{export_csv, parse_keyword_list, GoogleScanner, BULK_EXPORT_FILENAME},
};

#[derive(MultipartForm)]
pub struct BulkScanForm {
    /// Tabular keyword list; only the first column is read.
    #[multipart(limit = "1MiB")]
    keywords: Bytes,
}

#[derive(Deserialize)]
pub struct BulkScanParams {
    num_results: Option<u8>,
}

#[post("/bulk")]
pub async fn bulk_scan(
    scanner: web::Data<GoogleScanner>,
    settings: web::Data<Settings>,
    params: web::Query<BulkScanParams>,
    form: MultipartForm<BulkScanForm>,
) -> actix_web::Result<HttpResponse> {
    let keywords = parse_keyword_list(&form.keywords.data)?;
    let result_count = params.num_results.unwrap_or(DEFAULT_RESULT_COUNT);

    let mut queries = Vec::with_capacity(keywords.len());
    for keyword in &keywords {
        queries.push(SearchQuery::parse(
            keyword,
            result_count,
            settings.search.max_results,
        )?);
    }

    let report = scanner.scan_bulk(&queries).await;
    let blob = export_csv(report.results.records()).map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", BULK_EXPORT_FILENAME),
        ))
        .insert_header(("X-Failed-Keywords", report.failed_keywords.len().to_string()))
        .body(blob))
}
