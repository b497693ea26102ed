use std::path::{Path, PathBuf};

use crate::infrastructure::error::InfrastructureError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait FileStorage {
    /// Regular files directly inside `dir`, in no particular order.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, InfrastructureError>;

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError>;

    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError>;

    fn write_text(&self, path: &Path, text: &str) -> Result<(), InfrastructureError>;
}
