//! Catalog of artifacts fetched through the resource cache.

use cfdev_shared::errors::{CfdevError, CfdevResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One fetchable artifact. `name` is both the cache key and the file name
/// inside the cache directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ResourceItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            md5: None,
            size: None,
        }
    }
}

/// Ordered list of resource items with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    items: Vec<ResourceItem>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    items: Vec<ResourceItem>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CfdevError;

    fn try_from(raw: RawCatalog) -> CfdevResult<Self> {
        Catalog::new(raw.items)
    }
}

impl Catalog {
    pub fn new(items: Vec<ResourceItem>) -> CfdevResult<Self> {
        let mut names = HashSet::with_capacity(items.len());
        for item in &items {
            if !names.insert(item.name.as_str()) {
                return Err(CfdevError::Config(format!(
                    "duplicate resource in catalog: {}",
                    item.name
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ResourceItem] {
        &self.items
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn lookup(&self, name: &str) -> Option<&ResourceItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Copy of the catalog without the item called `name`, order preserved.
    pub fn without(&self, name: &str) -> Catalog {
        Catalog {
            items: self
                .items
                .iter()
                .filter(|item| item.name != name)
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
