//! Which resources to fetch and which image to boot.

use super::catalog::Catalog;
use cfdev_shared::errors::{CfdevError, CfdevResult};
use std::path::{Path, PathBuf};

/// Catalog entry the VM boots from.
pub const PRIMARY_IMAGE: &str = "cf-deps.iso";

/// Telemetry segment used when booting the cached primary image.
pub const DEFAULT_SEGMENT: &str = "cf";

/// Outcome of resource selection for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Items the cache must sync.
    pub to_sync: Catalog,
    /// Image handed to the hypervisor.
    pub image_path: PathBuf,
    /// Value of the telemetry segmentation property.
    pub segment: String,
}

/// Select resources for a run.
///
/// Without `explicit_image`, every catalog item is synced and the VM boots
/// the cached primary image. With one, the file must exist; the primary image
/// is left out of the sync and the segment becomes the file's base name.
/// An empty `explicit_image` counts as unset.
///
/// Only probes the filesystem; performs no other side effect.
pub fn select(
    catalog: &Catalog,
    cache_dir: &Path,
    explicit_image: Option<&Path>,
) -> CfdevResult<Selection> {
    match explicit_image.filter(|path| !path.as_os_str().is_empty()) {
        None => {
            let primary = catalog.lookup(PRIMARY_IMAGE).ok_or_else(|| {
                CfdevError::Config(format!("catalog has no {} entry", PRIMARY_IMAGE))
            })?;
            Ok(Selection {
                to_sync: catalog.clone(),
                image_path: cache_dir.join(&primary.name),
                segment: DEFAULT_SEGMENT.to_string(),
            })
        }
        Some(path) => {
            if !path.exists() {
                return Err(CfdevError::Validation {
                    path: path.display().to_string(),
                });
            }
            let segment = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(Selection {
                to_sync: catalog.without(PRIMARY_IMAGE),
                image_path: path.to_path_buf(),
                segment,
            })
        }
    }
}
