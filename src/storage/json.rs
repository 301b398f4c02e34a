use super::*;

use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

pub const STORAGE_PATH: &str = "./db/contacts.json";

pub struct JsonStore {
    pub path: String,
}

impl JsonStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Creates an empty document (and its parent directory) when none exists.
    /// Returns `false` if a document was already there.
    pub fn init(&self) -> Result<bool, AppError> {
        if fs::exists(Path::new(&self.path))? {
            return Ok(false);
        }
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        file.write_all(b"[]")?;

        debug!(path = %self.path, "created empty contact document");
        Ok(true)
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(STORAGE_PATH)
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing document is an error, not an empty book
        let data = fs::read(&self.path)?;
        let contacts: Vec<Contact> = serde_json::from_slice(&data)?;

        debug!(path = %self.path, count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contacts = serde_json::to_string_pretty(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json_contacts.as_bytes())?;

        debug!(path = %self.path, count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn location(&self) -> &str {
        &self.path
    }
}
