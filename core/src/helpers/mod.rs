pub mod links;
pub mod query;
pub mod records;
pub mod timing;
