//! # UniConnect Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`server`]: Listen address for the HTTP server
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`calendar`]: Academic calendar timezone and query limits
//!
//! # Example
//!
//! ```ignore
//! use uniconnect_config::{CalendarConfig, CorsConfig, ServerConfig};
//!
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let calendar_config = CalendarConfig::from_env();
//! ```

pub mod calendar;
pub mod cors;
pub mod server;

pub use calendar::CalendarConfig;
pub use cors::CorsConfig;
pub use server::ServerConfig;
