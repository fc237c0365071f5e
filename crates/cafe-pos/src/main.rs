//! # Cafe POS
//!
//! Rings up the sample orders against the cafe menu.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export CAFE_MENU_PATH=config/menu.toml
//! export RECEIPT_FORMAT=json
//!
//! cafe-pos
//! ```

use cafe_core::{
    BoxedPriceCatalog, BoxedReceiptPrinter, LogReceiptPrinter, StrategyRegistry,
};
use cafe_pos::{load_menu, run_order, sample_orders, AppConfig};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = AppConfig::from_env();
    let catalog: BoxedPriceCatalog = Arc::new(load_menu(&config)?);
    let printer: BoxedReceiptPrinter = Arc::new(LogReceiptPrinter::new(config.receipt_format));
    let registry = StrategyRegistry::cafe_defaults();

    info!("Promotions: {:?}", registry.promotion_names());
    info!("Payment methods: {:?}", registry.payment_names());

    for order in sample_orders() {
        // Rejected orders are already logged; keep ringing up the rest
        let _ = run_order(&order, &registry, &catalog, &printer)?;
    }

    Ok(())
}
