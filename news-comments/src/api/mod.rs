//! HTTP interface for the comment service

pub mod error;
pub mod extract;
pub mod routes;
pub mod server;

pub use error::ErrorResponse;
pub use routes::AppState;
pub use server::{router, ApiServer, ApiServerConfig};
