//! HTTP transport for the planner.
//!
//! - [`config`] - bind address from env and CLI
//! - [`handlers`] - request decoding and error mapping
//! - [`router`] - routes, CORS and the serve loop

mod config;
mod handlers;
mod router;

pub use config::{ServerConfig, ServerError};
pub use handlers::ErrorBody;
pub use router::{create_router, serve};
