//! Path resolution and directory conventions.
//!
//! Everything the tool touches lives in one of two places: the `adr`
//! directory under the current working directory (records, overrides, the
//! generated README) and the asset directory shipped next to the executable
//! (default templates, help text). [`AdrPaths`] captures both roots once at
//! startup so the rest of the crate never consults the environment.

use crate::error::{AdrzError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the record directory under the current working directory.
pub const ADR_DIR: &str = "adr";
/// Reserved subdirectory for images and other record attachments.
pub const ASSETS_SUBDIR: &str = "assets";
/// Reserved subdirectory holding per-project template overrides.
pub const TEMPLATES_SUBDIR: &str = "templates";
/// Name of the generated index file.
pub const README_FILE: &str = "README.md";

/// Relocates the bundled asset root, e.g. for packaged installs or tests.
pub const ASSETS_DIR_ENV: &str = "ADRZ_ASSETS_DIR";

/// Join path segments onto the current working directory.
///
/// No existence check: resolving a path that does not exist is valid,
/// callers check separately when they care.
pub fn from_cwd(parts: &[&str]) -> Result<PathBuf> {
    let mut path = env::current_dir()?;
    for part in parts {
        path.push(part);
    }
    Ok(path)
}

/// Join path segments onto the directory containing the running executable.
pub fn from_install_dir(parts: &[&str]) -> Result<PathBuf> {
    let exe = env::current_exe()?;
    let mut path = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AdrzError::Env("the executable's directory".to_string()))?;
    for part in parts {
        path.push(part);
    }
    Ok(path)
}

/// The two roots everything else is resolved against.
#[derive(Debug, Clone)]
pub struct AdrPaths {
    adr_dir: PathBuf,
    asset_root: PathBuf,
}

impl AdrPaths {
    /// Resolve roots from the process environment: the record directory
    /// under the current working directory, and the asset root next to the
    /// executable unless `ADRZ_ASSETS_DIR` relocates it.
    pub fn resolve() -> Result<Self> {
        let adr_dir = from_cwd(&[ADR_DIR])?;
        let asset_root = match env::var_os(ASSETS_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => from_install_dir(&[])?,
        };
        Ok(Self::with_roots(adr_dir, asset_root))
    }

    /// Build paths from explicit roots. Tests use this to point at temp
    /// directories without touching the process environment.
    pub fn with_roots(adr_dir: PathBuf, asset_root: PathBuf) -> Self {
        Self {
            adr_dir,
            asset_root,
        }
    }

    pub fn adr_dir(&self) -> &Path {
        &self.adr_dir
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.adr_dir.join(ASSETS_SUBDIR)
    }

    pub fn override_templates_dir(&self) -> PathBuf {
        self.adr_dir.join(TEMPLATES_SUBDIR)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.adr_dir.join(README_FILE)
    }

    pub fn default_templates_dir(&self) -> PathBuf {
        self.asset_root.join(TEMPLATES_SUBDIR)
    }

    pub fn record_path(&self, filename: &str) -> PathBuf {
        self.adr_dir.join(filename)
    }
}
