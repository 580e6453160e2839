pub mod config;
pub mod logging;

pub mod agent;
pub mod delay;
pub mod fetcher;
pub mod http;
pub mod link;
pub mod storage;
pub mod url_model;

pub use fetcher::{FetchError, FetchResult, Fetcher};
