//! Repositories over the content store.

mod content;

pub use content::ContentRepository;
