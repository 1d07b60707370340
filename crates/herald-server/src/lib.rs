pub mod caller;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;

pub use caller::Caller;
pub use config::AppConfig;
pub use error::ApiError;
pub use observability::init_tracing;
pub use server::{AppState, HeraldServer, ServerBuilder, build_app, build_app_with_state};
