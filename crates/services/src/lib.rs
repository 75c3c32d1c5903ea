#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_loader;
pub mod theme_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, LoadError};
pub use quiz_loader::{LoadReport, QuizLoader};
pub use theme_service::ThemeService;
