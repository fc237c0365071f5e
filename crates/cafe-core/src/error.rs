//! # Order Error Types
//!
//! Typed error handling for the cafe order pipeline.
//! Pipeline operations return `Result<T, OrderError>`.

use thiserror::Error;

/// Core error type for the order pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Ordered item has no entry in the catalog.
    /// Aborts the whole order: no discount, no fee, no receipt.
    #[error("Item not found in menu: {name}")]
    ItemNotFound { name: String },

    /// A strategy name did not match anything in the registry
    #[error("Unknown {kind} strategy: {name}")]
    UnknownStrategy { kind: StrategyKind, name: String },

    /// Menu or environment configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Which strategy family a registry lookup targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Promotion,
    Payment,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Promotion => write!(f, "promotion"),
            StrategyKind::Payment => write!(f, "payment"),
        }
    }
}

impl OrderError {
    /// Returns true if the order itself was rejected,
    /// as opposed to the pipeline being misconfigured
    pub fn is_order_rejection(&self) -> bool {
        matches!(self, OrderError::ItemNotFound { .. })
    }
}

/// Result type alias for order pipeline operations
pub type OrderResult<T> = Result<T, OrderError>;
