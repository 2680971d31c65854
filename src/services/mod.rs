pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod keyword_list;
pub mod scanner;

pub use exporter::*;
pub use extractor::*;
pub use fetcher::*;
pub use keyword_list::*;
pub use scanner::*;
