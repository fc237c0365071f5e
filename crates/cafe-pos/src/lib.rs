//! # cafe-pos
//!
//! Point-of-sale driver for the cafe order pipeline.
//!
//! This crate provides:
//! - Environment configuration (`.env` supported)
//! - Menu loading from `config/menu.toml`
//! - The sample orders rung up by the `cafe-pos` binary
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CAFE_MENU_PATH` | search `config/menu.toml` | Menu file |
//! | `RECEIPT_FORMAT` | `text` | `text` or `json` |
//! | `RUST_LOG` | `info` | Log filter |

pub mod config;
pub mod demo;

pub use config::{load_menu, AppConfig};
pub use demo::{run_order, sample_orders, SampleOrder};
