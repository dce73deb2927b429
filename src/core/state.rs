use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::Settings;
use crate::services::mailer::EmailService;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: PgPool,
    mailer: Option<EmailService>,
}

impl AppState {
    pub(crate) fn new(settings: Settings, db: PgPool, mailer: Option<EmailService>) -> Self {
        Self { inner: Arc::new(InnerState { settings, db, mailer }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub(crate) fn mailer(&self) -> Option<&EmailService> {
        self.inner.mailer.as_ref()
    }
}
