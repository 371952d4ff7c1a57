pub mod canon;
pub mod config;
pub mod context;
pub mod gemini;
pub mod locator;
pub mod models;
pub mod scripture_api;
pub mod server;
pub mod verses;

pub use config::AppConfig;
pub use locator::VerseLocator;
pub use server::{build_router, run_server, AppState};
