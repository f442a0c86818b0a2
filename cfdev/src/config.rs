//! Static configuration for a cfdev installation.
//!
//! Everything hangs off one home directory (`CFDEV_HOME`, default
//! `~/.cfdev`). An optional JSON file overrides individual fields.

use crate::resource::{Catalog, PRIMARY_IMAGE, ResourceItem};
use cfdev_shared::errors::{CfdevError, CfdevResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "CFDEV_HOME";

pub const DEFAULT_BOSH_DIRECTOR_IP: &str = "10.245.0.2";
pub const DEFAULT_CF_ROUTER_IP: &str = "10.144.0.34";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CfdevConfig {
    pub home_dir: PathBuf,
    pub state_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub vpnkit_state_dir: PathBuf,
    pub log_dir: PathBuf,
    pub bosh_director_ip: String,
    pub cf_router_ip: String,
    /// Artifacts synced through the resource cache.
    pub dependencies: Catalog,
}

/// Optional overrides read from a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    home_dir: Option<PathBuf>,
    state_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    vpnkit_state_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    bosh_director_ip: Option<String>,
    cf_router_ip: Option<String>,
    dependencies: Option<Catalog>,
}

impl CfdevConfig {
    /// Configuration rooted at `home_dir` with default addresses and catalog.
    pub fn new(home_dir: impl Into<PathBuf>) -> Self {
        let home_dir = home_dir.into();
        let state_dir = home_dir.join("state");
        Self {
            cache_dir: home_dir.join("cache"),
            vpnkit_state_dir: state_dir.join("vpnkit"),
            log_dir: home_dir.join("logs"),
            state_dir,
            home_dir,
            bosh_director_ip: DEFAULT_BOSH_DIRECTOR_IP.to_string(),
            cf_router_ip: DEFAULT_CF_ROUTER_IP.to_string(),
            dependencies: default_catalog(),
        }
    }

    /// Resolve the home directory from `CFDEV_HOME`, falling back to `~/.cfdev`.
    pub fn from_env() -> CfdevResult<Self> {
        let home_dir = match std::env::var_os(HOME_ENV) {
            Some(home) if !home.is_empty() => PathBuf::from(home),
            _ => dirs::home_dir()
                .ok_or_else(|| CfdevError::Config("cannot determine user home directory".into()))?
                .join(".cfdev"),
        };

        if !home_dir.is_absolute() {
            return Err(CfdevError::Config(format!(
                "{} must be an absolute path, got: {}",
                HOME_ENV,
                home_dir.display()
            )));
        }

        Ok(Self::new(home_dir))
    }

    /// Environment defaults with the overrides in the JSON file at `path`.
    pub fn load(path: &Path) -> CfdevResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CfdevError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let file: ConfigFile = serde_json::from_str(&raw).map_err(|e| {
            CfdevError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        let base = match &file.home_dir {
            Some(home) => Self::new(home),
            None => Self::from_env()?,
        };
        let config = base.merge(file);

        tracing::debug!(path = %path.display(), home = %config.home_dir.display(), "Loaded configuration");
        Ok(config)
    }

    fn merge(self, file: ConfigFile) -> Self {
        Self {
            home_dir: self.home_dir,
            state_dir: file.state_dir.unwrap_or(self.state_dir),
            cache_dir: file.cache_dir.unwrap_or(self.cache_dir),
            vpnkit_state_dir: file.vpnkit_state_dir.unwrap_or(self.vpnkit_state_dir),
            log_dir: file.log_dir.unwrap_or(self.log_dir),
            bosh_director_ip: file.bosh_director_ip.unwrap_or(self.bosh_director_ip),
            cf_router_ip: file.cf_router_ip.unwrap_or(self.cf_router_ip),
            dependencies: file.dependencies.unwrap_or(self.dependencies),
        }
    }

    /// Create every directory the configuration names.
    pub fn prepare(&self) -> CfdevResult<()> {
        for dir in [
            &self.home_dir,
            &self.state_dir,
            &self.cache_dir,
            &self.vpnkit_state_dir,
            &self.log_dir,
        ] {
            std::fs::create_dir_all(dir).map_err(|e| {
                CfdevError::Config(format!("failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

/// Artifacts a stock installation downloads.
fn default_catalog() -> Catalog {
    let items = [
        "cfdev-efi.iso",
        PRIMARY_IMAGE,
        "vpnkit",
        "hyperkit",
        "linuxkit",
        "UEFI.fd",
        "qcow-tool",
        "cfdevd",
    ]
    .into_iter()
    .map(ResourceItem::named)
    .collect();

    // Names above are unique.
    Catalog::new(items).unwrap_or_default()
}
