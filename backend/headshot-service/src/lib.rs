//! Headshot Service
//!
//! Microservice that fetches player headshots from the league image host,
//! normalizes them into square thumbnails, and packages team rosters into
//! downloadable archives.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
