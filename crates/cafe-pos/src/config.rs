//! # Application Configuration
//!
//! Environment-driven settings for the point-of-sale driver,
//! plus menu loading.

use cafe_core::{CafePriceCatalog, ReceiptFormat};
use std::path::{Path, PathBuf};

/// Menu locations tried when `CAFE_MENU_PATH` is not set
const MENU_SEARCH_PATHS: [&str; 3] = [
    "config/menu.toml",
    "../config/menu.toml",
    "../../config/menu.toml",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit menu file (`CAFE_MENU_PATH`)
    pub menu_path: Option<PathBuf>,
    /// Receipt output format (`RECEIPT_FORMAT`)
    pub receipt_format: ReceiptFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var("CAFE_MENU_PATH").ok(),
            std::env::var("RECEIPT_FORMAT").ok(),
        )
    }

    /// Build from raw variable values.
    ///
    /// An unparseable receipt format falls back to text.
    pub fn from_vars(menu_path: Option<String>, receipt_format: Option<String>) -> Self {
        let receipt_format = match receipt_format {
            Some(raw) => raw.parse::<ReceiptFormat>().unwrap_or_else(|e| {
                tracing::warn!("{}, using text receipts", e);
                ReceiptFormat::Text
            }),
            None => ReceiptFormat::Text,
        };

        Self {
            menu_path: menu_path
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            receipt_format,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Load the menu.
///
/// An explicit path must exist and parse. Otherwise the search paths are
/// tried, and the built-in menu is used when none is found.
pub fn load_menu(config: &AppConfig) -> anyhow::Result<CafePriceCatalog> {
    if let Some(path) = &config.menu_path {
        return read_menu(path);
    }

    for path in MENU_SEARCH_PATHS {
        let path = Path::new(path);
        if path.is_file() {
            return read_menu(path);
        }
    }

    tracing::warn!("No menu file found, using built-in cafe menu");
    Ok(CafePriceCatalog::new())
}

fn read_menu(path: &Path) -> anyhow::Result<CafePriceCatalog> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let catalog = CafePriceCatalog::from_toml(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    tracing::info!("Loaded {} menu items from {}", catalog.len(), path.display());
    Ok(catalog)
}
