use actix_web::{error::ErrorInternalServerError, get, web, HttpResponse};

use crate::{
    configuration::Settings,
    routes::scan_route::ScanParams,
    services::{export_csv, single_export_filename, GoogleScanner},
};

#[get("/export")]
pub async fn export(
    scanner: web::Data<GoogleScanner>,
    settings: web::Data<Settings>,
    params: web::Query<ScanParams>,
) -> actix_web::Result<HttpResponse> {
    let query = params.to_query(&settings)?;
    let records = scanner.scan(&query).await?;

    let blob = export_csv(&records).map_err(ErrorInternalServerError)?;
    let filename = single_export_filename(&query.keyword);

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(blob))
}
