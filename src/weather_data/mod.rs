pub mod client;
pub mod error;
pub mod extractor;
pub mod query;
pub mod source;
