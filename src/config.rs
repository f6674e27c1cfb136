use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const DATABASE_FILE: &str = "budgetmenu.db";
pub(crate) const LOG_FILE: &str = "budgetmenu.log";

/// Where the program keeps its files. There is no configuration file; the
/// layout is fixed under the per-user data directory.
#[derive(Debug, Clone)]
pub(crate) struct AppPaths {
    pub(crate) data_dir: PathBuf,
    pub(crate) database: PathBuf,
    pub(crate) log_file: PathBuf,
}

impl AppPaths {
    /// Resolve the platform data directory and make sure it exists.
    pub(crate) fn resolve() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "budgetmenu", "BudgetMenu")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let paths = Self::in_dir(proj_dirs.data_dir());
        paths.ensure_dir()?;
        Ok(paths)
    }

    pub(crate) fn in_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            database: data_dir.join(DATABASE_FILE),
            log_file: data_dir.join(LOG_FILE),
        }
    }

    pub(crate) fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })
    }
}
