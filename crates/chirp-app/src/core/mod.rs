//! # Core Application Module
//!
//! - [`AppCore`]: the application entry point
//! - [`AppConfig`]: configuration with TOML and environment overlays
//! - [`SessionContext`]: who is signed in, passed explicitly

mod app;
pub mod config;
pub mod session;

pub use app::AppCore;
pub use config::AppConfig;
pub use session::SessionContext;
