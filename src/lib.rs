pub mod app;
pub mod components;
pub mod domain;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod theme;
