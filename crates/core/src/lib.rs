//! Core logic for the charity site: public page view models built from the
//! content store with built-in defaults, and the admin content editor.

pub mod defaults;
pub mod services;

pub use services::*;
