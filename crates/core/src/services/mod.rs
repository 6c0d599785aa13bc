//! Site services.

#![allow(missing_docs)]

pub mod admin;
pub mod auth;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod editor;
pub mod media;
pub mod pages;
pub mod screens;

pub use admin::{AdminRegistry, CrudService, DeleteOutcome, FormMode, FormView, ListView, ScreenHandler};
pub use auth::{AuthService, LoginInput, LoginOutcome};
pub use carousel::Carousel;
pub use contact::{ContactAck, ContactInput, ContactService};
pub use content::ContentProvider;
pub use dashboard::{Dashboard, DashboardService, ScreenSummary};
pub use editor::{Field, FieldKind, FormSchema};
pub use media::{ImageFormat, ImageRef, MediaService};
pub use pages::PageService;
pub use screens::Screen;
