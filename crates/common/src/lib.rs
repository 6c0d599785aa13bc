//! Common utilities and shared types for the charity site service.
//!
//! This crate provides foundational components used across all workspace crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: UUID row identifiers via [`IdGenerator`]
//!
//! # Example
//!
//! ```no_run
//! use charity_common::{Config, IdGenerator, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     println!("Store backend: {:?}, new id: {}", config.store.backend, id_gen.generate());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod id;

pub use config::{AdminConfig, Config, ServerConfig, SiteConfig, StoreBackend, StoreConfig};
pub use error::{AppError, AppResult};
pub use id::{IdGenerator, timestamp_now};
