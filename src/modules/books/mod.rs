pub mod error;
pub mod filters;
pub mod models;
mod openapi;
pub mod routes;
pub mod store;
pub mod validator;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{settings::Settings, InitCtx, Module};
use std::sync::Arc;

use crate::utils::{RandomIdGenerator, SystemClock};
use store::BookStore;

/// Books module: the in-memory catalog and its CRUD endpoints.
pub struct BooksModule {
    store: Arc<BookStore>,
}

impl BooksModule {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            id_length = ctx.settings.catalog.id_length,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi::document())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            discarded = self.store.len(),
            "books module stopped; catalog discarded"
        );
        Ok(())
    }
}

/// Create the books module with an empty catalog using random ids and the system clock
pub fn create_module(settings: &Settings) -> Arc<dyn Module> {
    let store = BookStore::new(
        Arc::new(RandomIdGenerator::new(settings.catalog.id_length)),
        Arc::new(SystemClock),
    );
    Arc::new(BooksModule::new(Arc::new(store)))
}
