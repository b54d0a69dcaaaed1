//! HTTP adapter over the org chart
//!
//! Translates JSON requests into chart operations and chart errors into
//! status codes. The chart itself never sees HTTP types.

pub mod error;
pub mod handler;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use handler::{ApiResponse, SharedChart};
pub use server::{router, HttpServer, ServerConfig};
