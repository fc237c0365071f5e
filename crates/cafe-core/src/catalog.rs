//! # Price Catalog
//!
//! Item lookup and order totalling.
//!
//! A `PriceCatalog` owns a fixed name → price mapping for its whole lifetime.
//! The bundled `CafePriceCatalog` carries the cafe's beverage menu, and can
//! also be built from a `config/menu.toml` file.

use crate::error::{OrderError, OrderResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};

/// Amount in the smallest currency unit
pub type Amount = u64;

/// A priced menu item, produced by a catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Amount,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Amount) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

/// Core trait for price catalogs.
///
/// Implement `get_item` for a new menu and pass the catalog to an
/// `OrderProcessor`; `calculate` comes for free.
pub trait PriceCatalog: Send + Sync {
    /// Look up a single item by exact, case-sensitive name.
    ///
    /// # Errors
    /// `OrderError::ItemNotFound` when the name is not on the menu.
    fn get_item(&self, name: &str) -> OrderResult<Item>;

    /// Catalog label (for logging)
    fn catalog_name(&self) -> &'static str;

    /// Sum the price of every ordered name, counting duplicates.
    ///
    /// Stops at the first unknown name; no partial total is returned.
    fn calculate(&self, names: &[&str]) -> OrderResult<Amount> {
        let mut total: Amount = 0;
        for name in names {
            let item = self.get_item(name)?;
            total = total.saturating_add(item.price());
        }
        info!(
            catalog = self.catalog_name(),
            items = ?names,
            total,
            "Calculated order total"
        );
        Ok(total)
    }
}

/// Menu entry as written in `config/menu.toml`
#[derive(Debug, Clone, Deserialize)]
struct MenuEntry {
    name: String,
    price: Amount,
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuEntry>,
}

/// The cafe's beverage menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafePriceCatalog {
    prices: BTreeMap<String, Amount>,
}

impl CafePriceCatalog {
    /// Built-in menu
    pub const DEFAULT_MENU: [(&'static str, Amount); 6] = [
        ("espresso", 20000),
        ("latte", 30000),
        ("cappuccino", 28000),
        ("americano", 22000),
        ("macchiato", 32000),
        ("dalgona coffe", 23000),
    ];

    /// Create the catalog with the built-in menu
    pub fn new() -> Self {
        Self {
            prices: Self::DEFAULT_MENU
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect(),
        }
    }

    /// Create a catalog from name/price pairs.
    ///
    /// Rejects empty and duplicate names.
    pub fn from_prices<I, S>(entries: I) -> OrderResult<Self>
    where
        I: IntoIterator<Item = (S, Amount)>,
        S: Into<String>,
    {
        let mut prices = BTreeMap::new();
        for (name, price) in entries {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(OrderError::Configuration(
                    "menu item name must not be empty".to_string(),
                ));
            }
            if prices.insert(name.clone(), price).is_some() {
                return Err(OrderError::Configuration(format!(
                    "duplicate menu item: {}",
                    name
                )));
            }
        }
        Ok(Self { prices })
    }

    /// Load catalog from TOML string
    ///
    /// ```toml
    /// [[items]]
    /// name = "espresso"
    /// price = 20000
    /// ```
    pub fn from_toml(toml_str: &str) -> OrderResult<Self> {
        let menu: MenuFile = toml::from_str(toml_str)
            .map_err(|e| OrderError::Configuration(format!("invalid menu file: {}", e)))?;
        Self::from_prices(menu.items.into_iter().map(|e| (e.name, e.price)))
    }

    /// All menu items, ordered by name
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.prices
            .iter()
            .map(|(name, price)| Item::new(name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for CafePriceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceCatalog for CafePriceCatalog {
    fn get_item(&self, name: &str) -> OrderResult<Item> {
        match self.prices.get(name) {
            Some(price) => Ok(Item::new(name, *price)),
            None => {
                error!(item = name, "Item is not on the menu, order stopped");
                Err(OrderError::ItemNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    fn catalog_name(&self) -> &'static str {
        "cafe"
    }
}
