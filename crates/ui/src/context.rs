use std::sync::Arc;

use services::{QuizLoader, ThemeService};

pub trait UiApp: Send + Sync {
    fn quiz_loader(&self) -> Arc<QuizLoader>;
    fn theme_service(&self) -> Arc<ThemeService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loader: Arc<QuizLoader>,
    theme_service: Arc<ThemeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loader: app.quiz_loader(),
            theme_service: app.theme_service(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
