pub mod app_config;
pub mod export;

pub use app_config::Config;
pub use export::{write_catalog, ExportError};
