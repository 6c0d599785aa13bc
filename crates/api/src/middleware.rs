//! Shared application state.

use charity_common::Config;
use charity_core::{
    AdminRegistry, AuthService, ContactService, ContentProvider, DashboardService, MediaService,
    PageService,
};
use charity_db::store::SharedStore;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Content store shared by every service.
    pub store: SharedStore,
    /// Public page assembly.
    pub pages: PageService,
    /// Admin screens and their CRUD services.
    pub admin: AdminRegistry,
    /// Dashboard counts.
    pub dashboard: DashboardService,
    /// Contact form handling.
    pub contact: ContactService,
    /// Admin credential check.
    pub auth: AuthService,
    /// Image upload encoding.
    pub media: MediaService,
}

impl AppState {
    /// Wire every service to `store`.
    #[must_use]
    pub fn new(config: &Config, store: SharedStore) -> Self {
        let media = MediaService::new(
            config.site.placeholder_image_url.clone(),
            config.admin.upload_limit_bytes,
        );

        Self {
            pages: PageService::new(ContentProvider::new(store.clone()), media.clone()),
            admin: AdminRegistry::new(&store),
            dashboard: DashboardService::new(store.clone()),
            contact: ContactService::new(),
            auth: AuthService::new(config.admin.api_token.clone()),
            media,
            store,
        }
    }
}
