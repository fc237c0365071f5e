//! # Receipts
//!
//! Receipt type and the printers that emit it.
//! A receipt lists item names (no per-item price) and the final total.

use crate::catalog::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use uuid::Uuid;

/// A printed receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt number (generated)
    pub id: Uuid,

    /// Item names in order
    pub items: Vec<String>,

    /// Final total after promotion and payment fee
    pub total: Amount,

    /// Issued timestamp
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a new receipt with generated ID
    pub fn new(items: &[&str], total: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            items: items.iter().map(|s| s.to_string()).collect(),
            total,
            issued_at: Utc::now(),
        }
    }

    /// Text rendering: header, one line per item, total
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 2);
        lines.push(format!("Receipt {}:", self.id));
        lines.extend(self.items.iter().map(|item| format!("  - {}", item)));
        lines.push(format!("Total: {}", self.total));
        lines
    }
}

/// Core trait for receipt output.
///
/// Printing never fails; an empty order still gets a header and total.
pub trait ReceiptPrinter: Send + Sync {
    fn print_receipt(&self, items: &[&str], total: Amount);
}

/// Type alias for a shared receipt printer (dynamic dispatch)
pub type BoxedReceiptPrinter = Arc<dyn ReceiptPrinter>;

/// Receipt output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    /// One log line per receipt line
    #[default]
    Text,
    /// Single JSON record
    Json,
}

impl std::str::FromStr for ReceiptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(format!("unknown receipt format: {}", other)),
        }
    }
}

/// Emits receipts through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReceiptPrinter {
    format: ReceiptFormat,
}

impl LogReceiptPrinter {
    pub fn new(format: ReceiptFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReceiptFormat {
        self.format
    }
}

impl ReceiptPrinter for LogReceiptPrinter {
    fn print_receipt(&self, items: &[&str], total: Amount) {
        let receipt = Receipt::new(items, total);
        match self.format {
            ReceiptFormat::Text => {
                for line in receipt.lines() {
                    info!(target: "receipt", "{}", line);
                }
            }
            ReceiptFormat::Json => match serde_json::to_string(&receipt) {
                Ok(json) => info!(target: "receipt", "{}", json),
                Err(e) => error!(target: "receipt", error = %e, "Failed to serialize receipt"),
            },
        }
    }
}

/// Keeps every printed receipt in memory
#[derive(Debug, Default)]
pub struct BufferedReceiptPrinter {
    receipts: Mutex<Vec<Receipt>>,
}

impl BufferedReceiptPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all receipts printed so far
    pub fn receipts(&self) -> Vec<Receipt> {
        self.receipts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Most recent receipt, if any
    pub fn last(&self) -> Option<Receipt> {
        self.receipts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl ReceiptPrinter for BufferedReceiptPrinter {
    fn print_receipt(&self, items: &[&str], total: Amount) {
        self.receipts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Receipt::new(items, total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_lines() {
        let receipt = Receipt::new(&["espresso", "latte"], 73_000);
        let lines = receipt.lines();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Receipt "));
        assert_eq!(lines[1], "  - espresso");
        assert_eq!(lines[2], "  - latte");
        assert_eq!(lines[3], "Total: 73000");
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::new(&[], 0);
        let lines = receipt.lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Total: 0");
    }

    #[test]
    fn test_receipt_json() {
        let receipt = Receipt::new(&["latte", "latte"], 72_000);
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["total"], 72_000);
        assert_eq!(json["items"], serde_json::json!(["latte", "latte"]));

        let parsed: Receipt = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, receipt);
    }

    #[test]
    fn test_receipt_format_parse() {
        assert_eq!("text".parse::<ReceiptFormat>(), Ok(ReceiptFormat::Text));
        assert_eq!(" JSON ".parse::<ReceiptFormat>(), Ok(ReceiptFormat::Json));
        assert!("xml".parse::<ReceiptFormat>().is_err());
    }

    #[test]
    fn test_log_printer_handles_empty_order() {
        LogReceiptPrinter::new(ReceiptFormat::Text).print_receipt(&[], 0);
        LogReceiptPrinter::new(ReceiptFormat::Json).print_receipt(&[], 0);
    }

    #[test]
    fn test_buffered_printer() {
        let printer = BufferedReceiptPrinter::new();
        assert!(printer.last().is_none());

        printer.print_receipt(&["americano"], 22_000);
        printer.print_receipt(&[], 0);

        let receipts = printer.receipts();
        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[0].items, vec!["americano".to_string()]);
        assert_eq!(printer.last().unwrap().total, 0);
        assert_ne!(receipts[0].id, receipts[1].id);
    }
}
