use std::sync::Arc;

use quiz_core::model::{THEME_PREFERENCE_KEY, Theme};
use storage::PreferenceRepository;

/// Reads and writes the display theme.
///
/// Storage failures are logged and otherwise ignored: the theme is cosmetic
/// and must never block the quiz.
#[derive(Clone)]
pub struct ThemeService {
    repo: Arc<dyn PreferenceRepository>,
    prefers_dark: bool,
}

impl ThemeService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self {
            repo,
            prefers_dark: false,
        }
    }

    /// Theme to use when nothing valid is stored.
    #[must_use]
    pub fn with_system_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    /// Stored theme, or the system default.
    pub async fn load(&self) -> Theme {
        let stored = match self.repo.get_preference(THEME_PREFERENCE_KEY).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "could not read theme preference");
                None
            }
        };
        Theme::resolve(stored.as_deref(), self.prefers_dark)
    }

    /// Persist `theme`. Returns whether it was stored.
    pub async fn save(&self, theme: Theme) -> bool {
        match self
            .repo
            .set_preference(THEME_PREFERENCE_KEY, theme.as_str())
            .await
        {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, theme = %theme, "could not store theme preference");
                false
            }
        }
    }

    /// Flip `current`, persist the result and return it.
    pub async fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next).await;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use storage::{InMemoryRepository, StorageError};

    struct BrokenRepo;

    #[async_trait]
    impl PreferenceRepository for BrokenRepo {
        async fn get_preference(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("locked".to_string()))
        }

        async fn set_preference(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("locked".to_string()))
        }
    }

    #[tokio::test]
    async fn defaults_to_system_theme() {
        let repo = Arc::new(InMemoryRepository::new());
        assert_eq!(ThemeService::new(repo.clone()).load().await, Theme::Light);
        assert_eq!(
            ThemeService::new(repo).with_system_dark(true).load().await,
            Theme::Dark
        );
    }

    #[tokio::test]
    async fn toggle_persists() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = ThemeService::new(repo.clone());

        let next = service.toggle(Theme::Light).await;
        assert_eq!(next, Theme::Dark);
        assert_eq!(
            repo.get_preference(THEME_PREFERENCE_KEY).await.unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(service.load().await, Theme::Dark);
    }

    #[tokio::test]
    async fn garbage_value_falls_back() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.set_preference(THEME_PREFERENCE_KEY, "sepia").await.unwrap();
        let service = ThemeService::new(repo).with_system_dark(true);
        assert_eq!(service.load().await, Theme::Dark);
    }

    #[tokio::test]
    async fn storage_failures_are_swallowed() {
        let service = ThemeService::new(Arc::new(BrokenRepo));
        assert_eq!(service.load().await, Theme::Light);
        assert!(!service.save(Theme::Dark).await);
        assert_eq!(service.toggle(Theme::Dark).await, Theme::Light);
    }
}
