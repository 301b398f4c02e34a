pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use json::JsonStore;
pub use memory::MemStore;

/// Whole-document persistence for the contact collection.
///
/// `load` always returns the full collection and `save` always replaces it.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn location(&self) -> &str;
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
