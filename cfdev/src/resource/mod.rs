//! Resource catalog and per-run selection of what to fetch.

mod catalog;
mod select;

pub use catalog::{Catalog, ResourceItem};
pub use select::{DEFAULT_SEGMENT, PRIMARY_IMAGE, Selection, select};
