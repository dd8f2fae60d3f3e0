pub mod catalog;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod output;
pub mod record;
pub mod utility;
pub mod views;

pub use errors::Error;
