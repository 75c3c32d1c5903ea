use std::sync::Arc;

use storage::repository::Storage;
use storage::source::QuestionSource;

use crate::error::AppServicesError;
use crate::quiz_loader::QuizLoader;
use crate::theme_service::ThemeService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_loader: Arc<QuizLoader>,
    theme_service: Arc<ThemeService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, prefers_dark: bool) -> Self {
        let quiz_loader = Arc::new(QuizLoader::new(Arc::clone(&storage.questions)));
        let theme_service = Arc::new(
            ThemeService::new(Arc::clone(&storage.preferences)).with_system_dark(prefers_dark),
        );
        Self {
            quiz_loader,
            theme_service,
        }
    }

    /// Build services whose preferences are backed by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        questions: Arc<dyn QuestionSource>,
        prefers_dark: bool,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url, questions).await?;
        Ok(Self::from_storage(&storage, prefers_dark))
    }

    #[must_use]
    pub fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }

    #[must_use]
    pub fn theme_service(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme_service)
    }
}
