use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    configuration::Settings,
    routes::{bulk_route, default_route, export_route, scan_route},
    services::GoogleScanner,
};

pub fn run(
    listener: TcpListener,
    scanner: GoogleScanner,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let scanner = Data::new(scanner);
    let settings = Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(default_route::health)
            .service(
                web::scope("/scan")
                    .service(scan_route::scan)
                    .service(scan_route::scan_records)
                    .service(export_route::export)
                    .service(bulk_route::bulk_scan),
            )
            .app_data(scanner.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
