pub mod month;
pub mod record;
pub mod search_query;
