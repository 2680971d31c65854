pub mod bulk_route;
pub mod default_route;
pub mod export_route;
pub mod scan_route;
