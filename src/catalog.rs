//! Product catalog keyed by EAN-13 code
//!
//! The codec never depends on this module. It gives callers a narrow
//! repository to store `(name, code)` pairs produced by encoding and to look
//! up codes produced by decoding.

use crate::error::CatalogError;
use crate::models::Code13;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::SystemTime;
use tracing::{debug, info};

/// A stored product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    /// Insertion-ordered identifier, starting at 1
    pub id: u64,
    /// Product name as supplied
    pub name: String,
    /// Unique code
    pub code: Code13,
    /// Time the record was added
    pub created_at: SystemTime,
}

/// Storage capability for products, unique on `code`
pub trait ProductCatalog {
    /// Store a product; a code already present yields `CatalogError::Duplicate`
    fn add(&self, name: &str, code: &Code13) -> Result<ProductRecord, CatalogError>;

    /// Look a product up by code
    fn find_by_code(&self, code: &Code13) -> Result<Option<ProductRecord>, CatalogError>;

    /// All products, newest first
    fn list(&self) -> Result<Vec<ProductRecord>, CatalogError>;
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    by_code: HashMap<Code13, ProductRecord>,
}

/// Process-local catalog
#[derive(Default)]
pub struct InMemoryCatalog {
    inner: RwLock<Inner>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.by_code.len()).unwrap_or(0)
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> CatalogError {
    CatalogError::Storage("catalog lock poisoned".into())
}

impl ProductCatalog for InMemoryCatalog {
    fn add(&self, name: &str, code: &Code13) -> Result<ProductRecord, CatalogError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner.by_code.contains_key(code) {
            debug!(%code, "duplicate product code");
            return Err(CatalogError::Duplicate(*code));
        }

        inner.next_id += 1;
        let record = ProductRecord {
            id: inner.next_id,
            name: name.to_string(),
            code: *code,
            created_at: SystemTime::now(),
        };
        inner.by_code.insert(*code, record.clone());
        info!(id = record.id, %code, name, "product added");
        Ok(record)
    }

    fn find_by_code(&self, code: &Code13) -> Result<Option<ProductRecord>, CatalogError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.by_code.get(code).cloned())
    }

    fn list(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        let inner = self.inner.read().map_err(poisoned)?;
        let mut records: Vec<ProductRecord> = inner.by_code.values().cloned().collect();
        records.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(records)
    }
}
