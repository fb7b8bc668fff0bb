//! Version source adapters.

mod http;

pub use http::HttpVersionSource;
