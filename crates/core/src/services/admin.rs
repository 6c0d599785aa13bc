//! Admin CRUD over one screen.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use charity_common::{AppError, AppResult, IdGenerator};
use charity_db::entities::{
    AboutContent, Banner, BoardStaff, Cause, Certification, DonateContent, GalleryImage,
    LogoSettings, ProgramContent, Project, Record,
};
use charity_db::repositories::ContentRepository;
use charity_db::store::{Row, SharedStore, Table};
use serde::Serialize;
use serde_json::Value;

use super::editor::FormSchema;
use super::screens::{self, Screen};

/// Admin list view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    pub screen: Screen,
    /// Every row, active or not, in display order.
    pub items: Vec<T>,
    /// Call to action when there are no rows.
    pub empty_state: Option<String>,
}

/// Whether a form creates or edits a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

/// Admin form view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub screen: Screen,
    pub mode: FormMode,
    pub id: Option<String>,
    pub schema: FormSchema,
    pub values: Row,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOutcome {
    Deleted,
    /// Not confirmed; nothing was sent to the store.
    Cancelled,
}

/// CRUD service for one admin screen.
pub struct CrudService<T> {
    screen: Screen,
    schema: FormSchema,
    repo: ContentRepository<T>,
    id_gen: IdGenerator,
}

impl<T> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            screen: self.screen,
            schema: self.schema.clone(),
            repo: self.repo.clone(),
            id_gen: self.id_gen.clone(),
        }
    }
}

impl<T: Record> CrudService<T> {
    /// Create the service for `screen`.
    #[must_use]
    pub fn new(store: SharedStore, screen: Screen) -> Self {
        Self {
            screen,
            schema: screen.schema(),
            repo: ContentRepository::new(store, screen.table),
            id_gen: IdGenerator::new(),
        }
    }

    /// Screen this service edits.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Field schema of the screen's form.
    #[must_use]
    pub const fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Log a store failure and replace it with the screen's generic message.
    fn write_failed(&self, operation: &'static str, error: &AppError) -> AppError {
        tracing::error!(
            screen = self.screen.slug,
            table = %self.screen.table,
            operation,
            error = %error,
            "Admin write failed"
        );
        AppError::WriteFailed(self.screen.save_error())
    }

    /// Pass client errors through; everything else becomes the generic message.
    fn on_write_error(&self, operation: &'static str, error: AppError) -> AppError {
        if error.is_server_error() {
            self.write_failed(operation, &error)
        } else {
            error
        }
    }

    /// All rows in display order.
    pub async fn list(&self) -> AppResult<ListView<T>> {
        let items = self.repo.find_all().await.inspect_err(|e| {
            tracing::error!(screen = self.screen.slug, error = %e, "Failed to load admin list");
        })?;
        let empty_state = items.is_empty().then(|| self.screen.empty_state());
        Ok(ListView {
            screen: self.screen,
            items,
            empty_state,
        })
    }

    /// A blank form.
    #[must_use]
    pub fn new_form(&self) -> FormView {
        FormView {
            screen: self.screen,
            mode: FormMode::Create,
            id: None,
            schema: self.schema.clone(),
            values: self.schema.blank(),
        }
    }

    /// A form holding a row's current values.
    pub async fn edit_form(&self, id: &str) -> AppResult<FormView> {
        let entity = self.repo.get_by_id(id).await?;
        Ok(FormView {
            screen: self.screen,
            mode: FormMode::Edit,
            id: Some(id.to_string()),
            schema: self.schema.clone(),
            values: self.schema.values_of(&entity.to_row()?),
        })
    }

    /// Apply a repeatable-group edit to an unsaved form.
    pub fn edit_items(&self, form: &Row, field: &str, remove: Option<usize>) -> AppResult<Row> {
        let mut form = self.schema.normalize(form);
        match remove {
            Some(index) => self.schema.remove_item(&mut form, field, index)?,
            None => self.schema.add_item(&mut form, field)?,
        }
        Ok(form)
    }

    /// Normalize, validate and type-check a submitted form.
    fn accept(&self, form: &Row) -> AppResult<(Row, T)> {
        let fields = self.schema.normalize(form);
        self.schema.validate(&fields)?;
        let entity = T::from_row(fields.clone())
            .map_err(|e| AppError::Validation(format!("Invalid {}: {e}", self.screen.entity)))?;
        Ok((fields, entity))
    }

    /// Create a row. New rows go to the end of the display order.
    ///
    /// On a single-active screen an active row is inserted inactive and then
    /// activated. If activation fails the inserted row stays, inactive, and a
    /// retry inserts another one.
    pub async fn create(&self, form: &Row) -> AppResult<String> {
        let (_, mut entity) = self.accept(form)?;

        let id = self.id_gen.generate();
        entity.set_id(id.clone());

        if self.screen.table.has_sort_order() {
            let max = self
                .repo
                .max_sort_order()
                .await
                .map_err(|e| self.write_failed("create", &e))?;
            entity.set_sort_order(max.map_or(0, |m| m.saturating_add(1)));
        }

        let activate = self.screen.single_active && entity.is_active();
        if activate {
            // Stored inactive; activation below switches the others off first.
            let mut row = entity.to_row()?;
            row.insert("is_active".to_string(), Value::Bool(false));
            entity = T::from_row(row).map_err(|e| AppError::Internal(e.to_string()))?;
        }

        self.repo
            .insert(&entity)
            .await
            .map_err(|e| self.write_failed("create", &e))?;

        if activate {
            self.activate(&id).await?;
        }

        tracing::info!(screen = self.screen.slug, id = %id, "Created row");
        Ok(id)
    }

    /// Update a row from a submitted form.
    pub async fn update(&self, id: &str, form: &Row) -> AppResult<()> {
        let (mut fields, entity) = self.accept(form)?;

        let activate = self.screen.single_active && entity.is_active();
        if activate {
            fields.remove("is_active");
        }

        let affected = self
            .repo
            .update(id, fields)
            .await
            .map_err(|e| self.on_write_error("update", e))?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("{}: {id}", self.screen.table)));
        }

        if activate {
            self.activate(id).await?;
        }

        tracing::info!(screen = self.screen.slug, id = %id, "Updated row");
        Ok(())
    }

    /// Flip `is_active` on one row. Returns the new state.
    pub async fn toggle(&self, id: &str) -> AppResult<bool> {
        let entity = self.repo.get_by_id(id).await?;
        let is_active = !entity.is_active();

        if is_active && self.screen.single_active {
            self.activate(id).await?;
        } else {
            self.repo
                .set_active(id, is_active)
                .await
                .map_err(|e| self.write_failed("toggle", &e))?;
        }

        tracing::info!(screen = self.screen.slug, id = %id, is_active, "Toggled row");
        Ok(is_active)
    }

    /// Delete a row. Without confirmation no store call is made.
    pub async fn delete(&self, id: &str, confirmed: bool) -> AppResult<DeleteOutcome> {
        if !confirmed {
            tracing::debug!(screen = self.screen.slug, id = %id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let affected = self
            .repo
            .delete(id)
            .await
            .map_err(|e| self.write_failed("delete", &e))?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("{}: {id}", self.screen.table)));
        }

        tracing::info!(screen = self.screen.slug, id = %id, "Deleted row");
        Ok(DeleteOutcome::Deleted)
    }

    /// Make `id` the only active row: deactivate every other row, then
    /// activate the target.
    ///
    /// The two writes are separate. If the second fails, no row is active
    /// and the caller gets the generic write error.
    pub async fn activate(&self, id: &str) -> AppResult<()> {
        self.repo.get_by_id(id).await?;

        self.repo
            .deactivate_others(id)
            .await
            .map_err(|e| self.write_failed("deactivate_others", &e))?;

        self.repo
            .set_active(id, true)
            .await
            .map_err(|e| self.write_failed("activate", &e))?;

        tracing::info!(screen = self.screen.slug, id = %id, "Activated row");
        Ok(())
    }
}

/// Type-erased admin screen, so handlers can dispatch on the URL segment.
#[async_trait]
pub trait ScreenHandler: Send + Sync {
    fn screen(&self) -> Screen;
    fn schema(&self) -> &FormSchema;
    async fn list(&self) -> AppResult<Value>;
    fn new_form(&self) -> FormView;
    async fn edit_form(&self, id: &str) -> AppResult<FormView>;
    fn edit_items(&self, form: &Row, field: &str, remove: Option<usize>) -> AppResult<Row>;
    async fn create(&self, form: &Row) -> AppResult<String>;
    async fn update(&self, id: &str, form: &Row) -> AppResult<()>;
    async fn toggle(&self, id: &str) -> AppResult<bool>;
    async fn delete(&self, id: &str, confirmed: bool) -> AppResult<DeleteOutcome>;
    async fn activate(&self, id: &str) -> AppResult<()>;
}

#[async_trait]
impl<T: Record> ScreenHandler for CrudService<T> {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn schema(&self) -> &FormSchema {
        &self.schema
    }

    async fn list(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(Self::list(self).await?)?)
    }

    fn new_form(&self) -> FormView {
        Self::new_form(self)
    }

    async fn edit_form(&self, id: &str) -> AppResult<FormView> {
        Self::edit_form(self, id).await
    }

    fn edit_items(&self, form: &Row, field: &str, remove: Option<usize>) -> AppResult<Row> {
        Self::edit_items(self, form, field, remove)
    }

    async fn create(&self, form: &Row) -> AppResult<String> {
        Self::create(self, form).await
    }

    async fn update(&self, id: &str, form: &Row) -> AppResult<()> {
        Self::update(self, id, form).await
    }

    async fn toggle(&self, id: &str) -> AppResult<bool> {
        Self::toggle(self, id).await
    }

    async fn delete(&self, id: &str, confirmed: bool) -> AppResult<DeleteOutcome> {
        Self::delete(self, id, confirmed).await
    }

    async fn activate(&self, id: &str) -> AppResult<()> {
        if !self.screen.single_active {
            return Err(AppError::BadRequest(format!(
                "{} rows cannot be activated exclusively",
                self.screen.entity
            )));
        }
        Self::activate(self, id).await
    }
}

/// Every admin screen, keyed by URL segment.
#[derive(Clone)]
pub struct AdminRegistry {
    handlers: HashMap<&'static str, Arc<dyn ScreenHandler>>,
}

impl AdminRegistry {
    /// Build a handler for every screen in the catalog.
    #[must_use]
    pub fn new(store: &SharedStore) -> Self {
        fn handler<T: Record>(store: &SharedStore, screen: Screen) -> Arc<dyn ScreenHandler> {
            Arc::new(CrudService::<T>::new(store.clone(), screen))
        }

        let handlers = screens::ALL
            .into_iter()
            .map(|screen| {
                let h = match screen.table {
                    Table::Banners | Table::OldageBanners | Table::ChildrenBanners => {
                        handler::<Banner>(store, screen)
                    }
                    Table::AboutContent => handler::<AboutContent>(store, screen),
                    Table::ReliefContent
                    | Table::MedicalContent
                    | Table::OldageContent
                    | Table::ChildrenContent => handler::<ProgramContent>(store, screen),
                    Table::HomeGallery
                    | Table::GalleryImages
                    | Table::ReliefGallery
                    | Table::MedicalGallery
                    | Table::OldageGallery
                    | Table::ChildrenGallery => handler::<GalleryImage>(store, screen),
                    Table::Causes => handler::<Cause>(store, screen),
                    Table::Projects => handler::<Project>(store, screen),
                    Table::Certifications => handler::<Certification>(store, screen),
                    Table::BoardStaff => handler::<BoardStaff>(store, screen),
                    Table::DonateContent => handler::<DonateContent>(store, screen),
                    Table::LogoSettings => handler::<LogoSettings>(store, screen),
                };
                (screen.slug, h)
            })
            .collect();

        Self { handlers }
    }

    /// Handler for a URL segment.
    pub fn get(&self, slug: &str) -> AppResult<Arc<dyn ScreenHandler>> {
        self.handlers
            .get(slug)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("admin screen: {slug}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::screens::{BANNERS, CAUSES, CERTIFICATIONS, LOGOS, RELIEF_CONTENT};
    use charity_db::entities::{Banner, Cause, Certification, LogoSettings, ProgramContent};
    use charity_db::store::{MemoryStore, Table};
    use charity_db::test_utils::{row, seeded_store};
    use serde_json::json;

    fn cause_form(title: &str) -> Row {
        row(json!({
            "title": title,
            "description": "Help us",
            "image_url": "https://img.example/c.jpg"
        }))
    }

    fn active_ids(rows: &[Row]) -> Vec<&str> {
        rows.iter()
            .filter(|r| r["is_active"] == true)
            .filter_map(|r| r["id"].as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_create_appends_sort_order() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![
                json!({"id": "a", "title": "A", "sort_order": 0}),
                json!({"id": "b", "title": "B", "sort_order": 4}),
            ],
        )])
        .await;
        let service: CrudService<Cause> = CrudService::new(store.clone(), CAUSES);

        let id = service.create(&cause_form("Water")).await.unwrap();

        let rows = store.rows(Table::Causes).await;
        let created: Vec<&Row> = rows.iter().filter(|r| r["id"] == id.as_str()).collect();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0]["sort_order"], 5);
        assert_eq!(created[0]["title"], "Water");
        assert!(created[0]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_first_row_gets_sort_order_zero() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<Cause> = CrudService::new(store.clone(), CAUSES);

        service.create(&cause_form("First")).await.unwrap();

        assert_eq!(store.rows(Table::Causes).await[0]["sort_order"], 0);
    }

    #[tokio::test]
    async fn test_unsorted_tables_have_no_sort_order() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<ProgramContent> =
            CrudService::new(store.clone(), RELIEF_CONTENT);

        let form = row(json!({
            "title": "Relief",
            "description": "Flood relief",
            "services": [{"icon": "truck", "title": "Supplies", "description": ""}],
            "statistics": [{"number": "500", "label": "Families"}]
        }));
        service.create(&form).await.unwrap();

        let stored = &store.rows(Table::ReliefContent).await[0];
        assert!(!stored.contains_key("sort_order"));
        assert_eq!(stored["services"][0]["title"], "Supplies");
        assert_eq!(stored["health_tips"], json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_field() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<Cause> = CrudService::new(store.clone(), CAUSES);

        let err = service.create(&row(json!({"title": "  "}))).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.count(Table::Causes).await, 0);
    }

    #[tokio::test]
    async fn test_create_stores_data_uri_exactly() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<Banner> = CrudService::new(store.clone(), BANNERS);
        let data_uri = format!("data:image/png;base64,{}", "QUJD".repeat(1000));

        service
            .create(&row(json!({"image_url": data_uri, "title": "Hope"})))
            .await
            .unwrap();

        assert_eq!(store.rows(Table::Banners).await[0]["image_url"], data_uri.as_str());
    }

    #[tokio::test]
    async fn test_write_failure_uses_generic_message() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<Cause> = CrudService::new(store.clone(), CAUSES);
        store.fail_write_after(0);

        let err = service.create(&cause_form("Water")).await.unwrap_err();

        assert!(matches!(err, AppError::WriteFailed(_)));
        assert_eq!(err.to_string(), "Error saving cause. Please try again.");
    }

    #[tokio::test]
    async fn test_update_keeps_sort_order_and_created_at() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![json!({
                "id": "a",
                "title": "Old",
                "description": "d",
                "image_url": "https://img.example/a.jpg",
                "is_active": true,
                "sort_order": 3,
                "created_at": "2024-01-01T00:00:00Z"
            })],
        )])
        .await;
        let service: CrudService<Cause> = CrudService::new(store.clone(), CAUSES);

        service.update("a", &cause_form("New")).await.unwrap();

        let stored = &store.rows(Table::Causes).await[0];
        assert_eq!(stored["title"], "New");
        assert_eq!(stored["sort_order"], 3);
        assert_eq!(stored["created_at"], "2024-01-01T00:00:00Z");
        assert!(stored["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<Cause> = CrudService::new(store, CAUSES);
        assert!(matches!(
            service.update("nope", &cause_form("x")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![json!({"id": "a", "title": "A", "is_active": true})],
        )])
        .await;
        let service: CrudService<Cause> = CrudService::new(store.clone(), CAUSES);

        assert!(!service.toggle("a").await.unwrap());
        assert_eq!(store.rows(Table::Causes).await[0]["is_active"], false);
        assert!(service.toggle("a").await.unwrap());
        assert_eq!(store.rows(Table::Causes).await[0]["is_active"], true);
    }

    #[tokio::test]
    async fn test_cancelled_delete_leaves_rows() {
        let store = seeded_store(vec![(
            Table::Certifications,
            vec![
                json!({"id": "a", "certificate_name": "12A"}),
                json!({"id": "b", "certificate_name": "80G"}),
            ],
        )])
        .await;
        let service: CrudService<Certification> =
            CrudService::new(store.clone(), CERTIFICATIONS);
        // Any store write would fail; a cancelled delete must not reach it.
        store.fail_write_after(0);

        let outcome = service.delete("a", false).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.count(Table::Certifications).await, 2);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_row() {
        let store = seeded_store(vec![(
            Table::Certifications,
            vec![json!({"id": "a", "certificate_name": "12A"})],
        )])
        .await;
        let service: CrudService<Certification> =
            CrudService::new(store.clone(), CERTIFICATIONS);

        assert_eq!(service.delete("a", true).await.unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.count(Table::Certifications).await, 0);
        assert!(matches!(
            service.delete("a", true).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_empty_state() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<Cause> = CrudService::new(store, CAUSES);

        let view = service.list().await.unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.empty_state.as_deref(), Some("Add your first cause"));
    }

    #[tokio::test]
    async fn test_forms() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![json!({"id": "a", "title": "Edu", "description": "Books", "sort_order": 2})],
        )])
        .await;
        let service: CrudService<Cause> = CrudService::new(store, CAUSES);

        let blank = service.new_form();
        assert_eq!(blank.mode, FormMode::Create);
        assert_eq!(blank.values["title"], "");

        let edit = service.edit_form("a").await.unwrap();
        assert_eq!(edit.mode, FormMode::Edit);
        assert_eq!(edit.values["title"], "Edu");
        assert!(!edit.values.contains_key("sort_order"));

        assert!(matches!(
            service.edit_form("zzz").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_items() {
        let store = Arc::new(MemoryStore::new());
        let service: CrudService<ProgramContent> = CrudService::new(store, RELIEF_CONTENT);

        let form = service.edit_items(&Row::new(), "statistics", None).unwrap();
        let form = service.edit_items(&form, "statistics", None).unwrap();
        assert_eq!(form["statistics"].as_array().unwrap().len(), 2);

        let form = service.edit_items(&form, "statistics", Some(1)).unwrap();
        assert_eq!(form["statistics"].as_array().unwrap().len(), 1);
    }

    async fn logos() -> (Arc<MemoryStore>, CrudService<LogoSettings>) {
        let store = seeded_store(vec![(
            Table::LogoSettings,
            vec![
                json!({"id": "a", "logo_url": "a.png", "is_active": true}),
                json!({"id": "b", "logo_url": "b.png", "is_active": false}),
                json!({"id": "c", "logo_url": "c.png", "is_active": false}),
            ],
        )])
        .await;
        let service = CrudService::new(store.clone(), LOGOS);
        (store, service)
    }

    #[tokio::test]
    async fn test_activate_leaves_exactly_one_active() {
        let (store, service) = logos().await;

        service.activate("b").await.unwrap();

        assert_eq!(active_ids(&store.rows(Table::LogoSettings).await), vec!["b"]);
    }

    #[tokio::test]
    async fn test_activate_failure_between_writes_leaves_none_active() {
        let (store, service) = logos().await;
        // First write (deactivate others) succeeds, second (activate) fails.
        store.fail_write_after(1);

        let err = service.activate("b").await.unwrap_err();

        assert_eq!(err.to_string(), "Error saving logo. Please try again.");
        assert!(active_ids(&store.rows(Table::LogoSettings).await).is_empty());
    }

    #[tokio::test]
    async fn test_activate_unknown_logo_touches_nothing() {
        let (store, service) = logos().await;

        assert!(matches!(
            service.activate("zzz").await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(active_ids(&store.rows(Table::LogoSettings).await), vec!["a"]);
    }

    #[tokio::test]
    async fn test_toggle_on_logo_goes_through_activation() {
        let (store, service) = logos().await;

        assert!(service.toggle("c").await.unwrap());

        assert_eq!(active_ids(&store.rows(Table::LogoSettings).await), vec!["c"]);
    }

    #[tokio::test]
    async fn test_create_active_logo_deactivates_others() {
        let (store, service) = logos().await;

        let id = service
            .create(&row(json!({"logo_url": "new.png", "is_active": true})))
            .await
            .unwrap();

        assert_eq!(
            active_ids(&store.rows(Table::LogoSettings).await),
            vec![id.as_str()]
        );
    }

    #[tokio::test]
    async fn test_create_active_logo_keeps_row_when_activation_fails() {
        let (store, service) = logos().await;
        // Insert succeeds, deactivate others fails.
        store.fail_write_after(1);

        let err = service
            .create(&row(json!({"logo_url": "new.png", "is_active": true})))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::WriteFailed(_)));
        let rows = store.rows(Table::LogoSettings).await;
        assert_eq!(rows.len(), 4);
        let inserted = rows.iter().find(|r| r["logo_url"] == "new.png").unwrap();
        assert_eq!(inserted["is_active"], false);
        assert_eq!(active_ids(&rows), vec!["a"]);
    }

    #[tokio::test]
    async fn test_registry_covers_every_screen() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let registry = AdminRegistry::new(&store);

        for screen in screens::ALL {
            assert_eq!(registry.get(screen.slug).unwrap().screen(), screen);
        }
        assert!(matches!(registry.get("users"), Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_exclusive_activation_only_on_logos() {
        let store = seeded_store(vec![(
            Table::Causes,
            vec![json!({"id": "a", "title": "A", "is_active": false})],
        )])
        .await;
        let shared: SharedStore = store;
        let registry = AdminRegistry::new(&shared);

        let causes = registry.get("causes").unwrap();
        assert!(matches!(causes.activate("a").await, Err(AppError::BadRequest(_))));
    }
}
